//! Immutable operation-node trees.
//!
//! Every statement is represented as a tree of frozen nodes. A node is built
//! once by a `create` factory and only ever "modified" through `clone_with_*`
//! operations that produce a new node, carrying untouched composite children
//! over by reference (`Arc`). The original node stays usable and unchanged,
//! so a child can be shared between any number of parents.

pub mod alter_table;
pub mod column;
pub mod common;
pub mod drop_index;

use std::fmt;
use std::sync::Arc;

use crate::ast::alter_table::{
    AddColumnNode, AlterColumnNode, AlterTableNode, DropColumnNode, RenameColumnNode,
};
use crate::ast::column::ColumnDefinitionNode;
use crate::ast::common::{
    CheckConstraintNode, DataTypeNode, IdentifierNode, RawNode, ReferencesNode, TableNode,
    ValueNode,
};
use crate::ast::drop_index::DropIndexNode;

/// Discriminator identifying each operation-node family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Identifier,
    Table,
    DataType,
    Value,
    Raw,
    References,
    CheckConstraint,
    ColumnDefinition,
    AddColumn,
    DropColumn,
    RenameColumn,
    AlterColumn,
    AlterTable,
    DropIndex,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Identifier => "IdentifierNode",
            NodeKind::Table => "TableNode",
            NodeKind::DataType => "DataTypeNode",
            NodeKind::Value => "ValueNode",
            NodeKind::Raw => "RawNode",
            NodeKind::References => "ReferencesNode",
            NodeKind::CheckConstraint => "CheckConstraintNode",
            NodeKind::ColumnDefinition => "ColumnDefinitionNode",
            NodeKind::AddColumn => "AddColumnNode",
            NodeKind::DropColumn => "DropColumnNode",
            NodeKind::RenameColumn => "RenameColumnNode",
            NodeKind::AlterColumn => "AlterColumnNode",
            NodeKind::AlterTable => "AlterTableNode",
            NodeKind::DropIndex => "DropIndexNode",
        };
        f.write_str(name)
    }
}

/// A single node in a statement tree.
///
/// One variant per node family; the discriminator doubles as the `kind` tag
/// that pipeline collaborators match on.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationNode {
    Identifier(IdentifierNode),
    Table(TableNode),
    DataType(DataTypeNode),
    Value(ValueNode),
    Raw(RawNode),
    References(ReferencesNode),
    CheckConstraint(CheckConstraintNode),
    ColumnDefinition(Arc<ColumnDefinitionNode>),
    AddColumn(AddColumnNode),
    DropColumn(DropColumnNode),
    RenameColumn(RenameColumnNode),
    AlterColumn(AlterColumnNode),
    AlterTable(AlterTableNode),
    DropIndex(DropIndexNode),
}

impl OperationNode {
    /// The node's kind discriminator. O(1), never inspects children.
    pub fn kind(&self) -> NodeKind {
        match self {
            OperationNode::Identifier(_) => NodeKind::Identifier,
            OperationNode::Table(_) => NodeKind::Table,
            OperationNode::DataType(_) => NodeKind::DataType,
            OperationNode::Value(_) => NodeKind::Value,
            OperationNode::Raw(_) => NodeKind::Raw,
            OperationNode::References(_) => NodeKind::References,
            OperationNode::CheckConstraint(_) => NodeKind::CheckConstraint,
            OperationNode::ColumnDefinition(_) => NodeKind::ColumnDefinition,
            OperationNode::AddColumn(_) => NodeKind::AddColumn,
            OperationNode::DropColumn(_) => NodeKind::DropColumn,
            OperationNode::RenameColumn(_) => NodeKind::RenameColumn,
            OperationNode::AlterColumn(_) => NodeKind::AlterColumn,
            OperationNode::AlterTable(_) => NodeKind::AlterTable,
            OperationNode::DropIndex(_) => NodeKind::DropIndex,
        }
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind() == kind
    }
}

/// Anything that can be spliced into a statement as a pre-built fragment.
pub trait OperationNodeSource {
    fn to_operation_node(&self) -> OperationNode;
}
