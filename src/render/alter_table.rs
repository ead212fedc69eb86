//! Rendering for the ALTER TABLE statement family.

use crate::ast::alter_table::{AlterColumnNode, AlterTableNode};
use crate::error::CompileError;
use crate::render::common::render_value_position;
use crate::render::{Render, Renderer};

impl Render for AlterTableNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        let populated = [
            self.rename_to.is_some(),
            self.set_schema.is_some(),
            self.add_column.is_some(),
            self.drop_column.is_some(),
            self.rename_column.is_some(),
            self.alter_column.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        match populated {
            0 => return Err(CompileError::EmptyAlterTable),
            1 => {}
            _ => return Err(CompileError::ConflictingAlterTable),
        }

        r.sql.push_str("ALTER TABLE ");
        self.table.render(r)?;

        if let Some(rename_to) = &self.rename_to {
            r.sql.push_str(" RENAME TO ");
            rename_to.render(r)?;
        } else if let Some(set_schema) = &self.set_schema {
            r.sql.push_str(" SET SCHEMA ");
            set_schema.render(r)?;
        } else if let Some(add_column) = &self.add_column {
            r.sql.push_str(" ADD COLUMN ");
            add_column.column.render(r)?;
        } else if let Some(drop_column) = &self.drop_column {
            r.sql.push_str(" DROP COLUMN ");
            drop_column.column.render(r)?;
        } else if let Some(rename_column) = &self.rename_column {
            r.sql.push_str(" RENAME COLUMN ");
            rename_column.column.render(r)?;
            r.sql.push_str(" TO ");
            rename_column.rename_to.render(r)?;
        } else if let Some(alter_column) = &self.alter_column {
            alter_column.render(r)?;
        }
        Ok(())
    }
}

impl Render for AlterColumnNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str(" ALTER COLUMN ");
        self.column.render(r)?;

        if let Some(data_type) = &self.data_type {
            r.sql.push_str(" SET DATA TYPE ");
            data_type.render(r)?;
        } else if let Some(set_default) = &self.set_default {
            r.sql.push_str(" SET DEFAULT ");
            render_value_position(set_default, r)?;
        } else if self.drop_default {
            r.sql.push_str(" DROP DEFAULT");
        } else if self.set_not_null {
            r.sql.push_str(" SET NOT NULL");
        } else if self.drop_not_null {
            r.sql.push_str(" DROP NOT NULL");
        } else {
            return Err(CompileError::EmptyAlterColumn(self.column.name.clone()));
        }
        Ok(())
    }
}
