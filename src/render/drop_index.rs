//! Rendering for the DROP INDEX statement family.

use crate::ast::drop_index::{DropIndexModifier, DropIndexNode};
use crate::error::CompileError;
use crate::render::{Render, Renderer};

impl Render for DropIndexNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str("DROP INDEX ");
        if self.modifier == Some(DropIndexModifier::IfExists) {
            r.sql.push_str("IF EXISTS ");
        }
        self.name.render(r)
    }
}
