//! Refinement folding over a pending column definition.

use crate::ast::column::ColumnDefinitionNode;
use crate::ast::common::{CheckConstraintNode, OnDelete, ReferencesNode, TableNode, ValueNode};
use crate::ast::{OperationNode, OperationNodeSource};
use crate::error::NodeError;
use crate::value::Value;

/// Accumulates refinements on a [`ColumnDefinitionNode`], one clone per call.
#[derive(Debug, Clone)]
#[must_use = "a column definition does nothing until attached to a statement"]
pub struct ColumnDefinitionBuilder {
    node: ColumnDefinitionNode,
}

impl ColumnDefinitionBuilder {
    pub fn new(node: ColumnDefinitionNode) -> Self {
        Self { node }
    }

    /// Makes the column auto-incrementing.
    pub fn increments(&self) -> Self {
        Self::new(self.node.clone_with_auto_increment())
    }

    pub fn primary_key(&self) -> Self {
        Self::new(self.node.clone_with_primary_key())
    }

    /// Adds a foreign-key reference given as `table.column` or
    /// `schema.table.column`.
    pub fn references(&self, reference: &str) -> Result<Self, NodeError> {
        Ok(Self::new(
            self.node.clone_with_references(parse_reference(reference)?),
        ))
    }

    /// Sets the ON DELETE action of a previously added reference.
    pub fn on_delete(&self, on_delete: OnDelete) -> Result<Self, NodeError> {
        Ok(Self::new(self.node.clone_with_on_delete(on_delete)?))
    }

    pub fn unique(&self) -> Self {
        Self::new(self.node.clone_with_unique())
    }

    pub fn not_null(&self) -> Self {
        Self::new(self.node.clone_with_not_null())
    }

    /// Sets a default value, inlined as a literal when the statement is
    /// compiled.
    pub fn default_to(&self, value: impl Into<Value>) -> Self {
        Self::new(
            self.node
                .clone_with_default(OperationNode::Value(ValueNode::create_immediate(value))),
        )
    }

    /// Sets a default from a pre-built fragment, e.g. `raw("now()")`.
    pub fn default_to_expr(&self, source: &dyn OperationNodeSource) -> Self {
        Self::new(self.node.clone_with_default(source.to_operation_node()))
    }

    /// Adds a CHECK constraint with a caller-supplied SQL expression.
    pub fn check(&self, expression: impl Into<String>) -> Self {
        Self::new(
            self.node
                .clone_with_check(CheckConstraintNode::create(expression)),
        )
    }

    pub fn to_operation_node(&self) -> ColumnDefinitionNode {
        self.node.clone()
    }
}

fn parse_reference(reference: &str) -> Result<ReferencesNode, NodeError> {
    let parts: Vec<&str> = reference.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(NodeError::InvalidReference(reference.to_string()));
    }
    match parts.as_slice() {
        [table, column] => Ok(ReferencesNode::create(TableNode::create(*table), *column)),
        [schema, table, column] => Ok(ReferencesNode::create(
            TableNode::create_with_schema(*schema, *table),
            *column,
        )),
        _ => Err(NodeError::InvalidReference(reference.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::common::DataTypeNode;
    use crate::raw::raw;

    fn builder() -> ColumnDefinitionBuilder {
        ColumnDefinitionBuilder::new(ColumnDefinitionNode::create(
            "owner_id",
            OperationNode::DataType(DataTypeNode::create("integer")),
        ))
    }

    #[test]
    fn test_each_call_returns_a_new_builder() {
        let first = builder();
        let second = first.not_null();

        assert!(!first.to_operation_node().not_null);
        assert!(second.to_operation_node().not_null);
    }

    #[test]
    fn test_reference_parsing() {
        let node = builder()
            .references("person.id")
            .unwrap()
            .to_operation_node();
        let references = node.references.unwrap();
        assert_eq!(references.table.identifier.name, "person");
        assert_eq!(references.column.name, "id");

        let node = builder()
            .references("archive.person.id")
            .unwrap()
            .to_operation_node();
        let references = node.references.unwrap();
        assert_eq!(
            references.table.schema.as_ref().unwrap().name,
            "archive"
        );

        let err = builder().references("id").unwrap_err();
        assert_eq!(err, NodeError::InvalidReference("id".to_string()));
        let err = builder().references("person..id").unwrap_err();
        assert_eq!(err, NodeError::InvalidReference("person..id".to_string()));
    }

    #[test]
    fn test_on_delete_before_references_fails() {
        let err = builder().on_delete(OnDelete::Cascade).unwrap_err();
        assert_eq!(
            err,
            NodeError::OnDeleteWithoutReferences("owner_id".to_string())
        );
    }

    #[test]
    fn test_default_to_expr_splices_fragment() {
        let node = builder().default_to_expr(&raw("now()")).to_operation_node();
        assert_eq!(
            *node.default_to.unwrap(),
            raw("now()").to_operation_node()
        );
    }
}
