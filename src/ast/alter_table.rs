//! Nodes for the ALTER TABLE statement family.

use std::sync::Arc;

use crate::ast::OperationNode;
use crate::ast::column::ColumnDefinitionNode;
use crate::ast::common::{DataTypeNode, IdentifierNode, TableNode};

/// ADD COLUMN operation wrapping a full column definition.
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumnNode {
    pub column: Arc<ColumnDefinitionNode>,
}

impl AddColumnNode {
    pub fn create(column: ColumnDefinitionNode) -> Self {
        Self {
            column: Arc::new(column),
        }
    }
}

/// DROP COLUMN operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropColumnNode {
    pub column: IdentifierNode,
}

impl DropColumnNode {
    pub fn create(column: impl Into<String>) -> Self {
        Self {
            column: IdentifierNode::create(column),
        }
    }
}

/// RENAME COLUMN operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameColumnNode {
    pub column: IdentifierNode,
    pub rename_to: IdentifierNode,
}

impl RenameColumnNode {
    pub fn create(column: impl Into<String>, rename_to: impl Into<String>) -> Self {
        Self {
            column: IdentifierNode::create(column),
            rename_to: IdentifierNode::create(rename_to),
        }
    }
}

/// ALTER COLUMN operation. Exactly one refinement field is populated per
/// statement; the builder guarantees this by always cloning from the bare
/// node created by `create`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterColumnNode {
    pub column: IdentifierNode,
    pub data_type: Option<DataTypeNode>,
    pub set_default: Option<Arc<OperationNode>>,
    pub drop_default: bool,
    pub set_not_null: bool,
    pub drop_not_null: bool,
}

impl AlterColumnNode {
    pub fn create(column: impl Into<String>) -> Self {
        Self {
            column: IdentifierNode::create(column),
            data_type: None,
            set_default: None,
            drop_default: false,
            set_not_null: false,
            drop_not_null: false,
        }
    }

    pub fn clone_with_data_type(&self, data_type: DataTypeNode) -> Self {
        Self {
            data_type: Some(data_type),
            ..self.clone()
        }
    }

    pub fn clone_with_set_default(&self, default: OperationNode) -> Self {
        Self {
            set_default: Some(Arc::new(default)),
            ..self.clone()
        }
    }

    pub fn clone_with_drop_default(&self) -> Self {
        Self {
            drop_default: true,
            ..self.clone()
        }
    }

    pub fn clone_with_set_not_null(&self) -> Self {
        Self {
            set_not_null: true,
            ..self.clone()
        }
    }

    pub fn clone_with_drop_not_null(&self) -> Self {
        Self {
            drop_not_null: true,
            ..self.clone()
        }
    }
}

/// Root of an ALTER TABLE statement.
///
/// The node itself allows any combination of operation fields; "one statement,
/// one operation" is a property of the builder call graph, which clones every
/// operation from the initial, operation-free node.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTableNode {
    pub table: Arc<TableNode>,
    pub rename_to: Option<TableNode>,
    pub set_schema: Option<IdentifierNode>,
    pub add_column: Option<AddColumnNode>,
    pub drop_column: Option<DropColumnNode>,
    pub rename_column: Option<RenameColumnNode>,
    pub alter_column: Option<AlterColumnNode>,
}

impl AlterTableNode {
    pub fn create(table: TableNode) -> Self {
        Self {
            table: Arc::new(table),
            rename_to: None,
            set_schema: None,
            add_column: None,
            drop_column: None,
            rename_column: None,
            alter_column: None,
        }
    }

    pub fn clone_with_rename_to(&self, rename_to: TableNode) -> Self {
        Self {
            rename_to: Some(rename_to),
            ..self.clone()
        }
    }

    pub fn clone_with_set_schema(&self, set_schema: IdentifierNode) -> Self {
        Self {
            set_schema: Some(set_schema),
            ..self.clone()
        }
    }

    pub fn clone_with_add_column(&self, add_column: AddColumnNode) -> Self {
        Self {
            add_column: Some(add_column),
            ..self.clone()
        }
    }

    pub fn clone_with_drop_column(&self, drop_column: DropColumnNode) -> Self {
        Self {
            drop_column: Some(drop_column),
            ..self.clone()
        }
    }

    pub fn clone_with_rename_column(&self, rename_column: RenameColumnNode) -> Self {
        Self {
            rename_column: Some(rename_column),
            ..self.clone()
        }
    }

    pub fn clone_with_alter_column(&self, alter_column: AlterColumnNode) -> Self {
        Self {
            alter_column: Some(alter_column),
            ..self.clone()
        }
    }
}
