//! Default compile stage: turns a node tree into dialect-specific command
//! text plus an ordered list of bound parameters.

pub mod alter_table;
pub mod common;
pub mod drop_index;

use crate::ast::OperationNode;
use crate::dialect::Dialect;
use crate::error::CompileError;
use crate::executor::CompiledQuery;
use crate::value::Value;

/// Accumulates statement text and bound parameters during compilation.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Appends the next placeholder to the text and binds `value` to it.
    pub fn add_param(&mut self, value: Value) {
        let placeholder = self.dialect.placeholder(self.params.len());
        self.sql.push_str(&placeholder);
        self.params.push(value);
    }

    pub fn finish(self) -> CompiledQuery {
        CompiledQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

pub trait Render {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError>;
}

impl Render for OperationNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        match self {
            OperationNode::Identifier(node) => node.render(r),
            OperationNode::Table(node) => node.render(r),
            OperationNode::DataType(node) => node.render(r),
            OperationNode::Value(node) => node.render(r),
            OperationNode::Raw(node) => node.render(r),
            OperationNode::References(node) => node.render(r),
            OperationNode::CheckConstraint(node) => node.render(r),
            OperationNode::ColumnDefinition(node) => node.render(r),
            OperationNode::AlterTable(node) => node.render(r),
            OperationNode::DropIndex(node) => node.render(r),
            // Operation wrappers only appear inside an AlterTableNode and are
            // rendered by it; a bare one has no statement-level meaning.
            OperationNode::AddColumn(_)
            | OperationNode::DropColumn(_)
            | OperationNode::RenameColumn(_)
            | OperationNode::AlterColumn(_) => Err(CompileError::UnsupportedNode(self.kind())),
        }
    }
}
