//! The column definition node used by ADD COLUMN.

use std::sync::Arc;

use crate::ast::OperationNode;
use crate::ast::common::{CheckConstraintNode, IdentifierNode, OnDelete, ReferencesNode};
use crate::error::NodeError;

/// A full column definition: name, data type, and refinements.
///
/// `data_type` and `default_to` hold a [`DataTypeNode`](super::common::DataTypeNode)
/// / [`ValueNode`](super::common::ValueNode) or a raw fragment; the compile
/// stage rejects any other kind in those positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinitionNode {
    pub column: IdentifierNode,
    pub data_type: Arc<OperationNode>,
    pub references: Option<Arc<ReferencesNode>>,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub unique: bool,
    pub not_null: bool,
    pub default_to: Option<Arc<OperationNode>>,
    pub check: Option<Arc<CheckConstraintNode>>,
}

impl ColumnDefinitionNode {
    pub fn create(column: impl Into<String>, data_type: OperationNode) -> Self {
        Self {
            column: IdentifierNode::create(column),
            data_type: Arc::new(data_type),
            references: None,
            primary_key: false,
            auto_increment: false,
            unique: false,
            not_null: false,
            default_to: None,
            check: None,
        }
    }

    pub fn clone_with_primary_key(&self) -> Self {
        Self {
            primary_key: true,
            ..self.clone()
        }
    }

    pub fn clone_with_auto_increment(&self) -> Self {
        Self {
            auto_increment: true,
            ..self.clone()
        }
    }

    pub fn clone_with_unique(&self) -> Self {
        Self {
            unique: true,
            ..self.clone()
        }
    }

    pub fn clone_with_not_null(&self) -> Self {
        Self {
            not_null: true,
            ..self.clone()
        }
    }

    pub fn clone_with_default(&self, default: OperationNode) -> Self {
        Self {
            default_to: Some(Arc::new(default)),
            ..self.clone()
        }
    }

    pub fn clone_with_references(&self, references: ReferencesNode) -> Self {
        Self {
            references: Some(Arc::new(references)),
            ..self.clone()
        }
    }

    /// Attaches an ON DELETE action to the existing foreign-key reference.
    pub fn clone_with_on_delete(&self, on_delete: OnDelete) -> Result<Self, NodeError> {
        let references = self
            .references
            .as_ref()
            .ok_or_else(|| NodeError::OnDeleteWithoutReferences(self.column.name.clone()))?;
        Ok(Self {
            references: Some(Arc::new(references.clone_with_on_delete(on_delete))),
            ..self.clone()
        })
    }

    pub fn clone_with_check(&self, check: CheckConstraintNode) -> Self {
        Self {
            check: Some(Arc::new(check)),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::common::{DataTypeNode, TableNode, ValueNode};

    fn column() -> ColumnDefinitionNode {
        ColumnDefinitionNode::create(
            "nickname",
            OperationNode::DataType(DataTypeNode::create("varchar(255)")),
        )
    }

    #[test]
    fn test_clone_with_targets_single_field() {
        let node = column();
        let not_null = node.clone_with_not_null();

        assert!(!node.not_null);
        assert!(not_null.not_null);
        assert_eq!(not_null.column, node.column);
        assert!(!not_null.unique);
        assert!(!not_null.primary_key);
    }

    #[test]
    fn test_clone_with_shares_untouched_children() {
        let node = column().clone_with_default(OperationNode::Value(
            ValueNode::create_immediate("anon"),
        ));
        let refined = node.clone_with_unique();

        assert!(Arc::ptr_eq(&node.data_type, &refined.data_type));
        assert!(Arc::ptr_eq(
            node.default_to.as_ref().unwrap(),
            refined.default_to.as_ref().unwrap()
        ));
    }

    #[test]
    fn test_on_delete_requires_references() {
        let err = column().clone_with_on_delete(OnDelete::Cascade).unwrap_err();
        assert_eq!(
            err,
            NodeError::OnDeleteWithoutReferences("nickname".to_string())
        );

        let with_refs = column()
            .clone_with_references(ReferencesNode::create(TableNode::create("person"), "id"));
        let with_action = with_refs.clone_with_on_delete(OnDelete::SetNull).unwrap();
        assert_eq!(
            with_action.references.as_ref().unwrap().on_delete,
            Some(OnDelete::SetNull)
        );
        // The original reference node is untouched.
        assert_eq!(with_refs.references.as_ref().unwrap().on_delete, None);
    }
}
