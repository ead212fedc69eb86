//! Leaf and shared nodes reused across statement families.

use crate::value::Value;

/// A quoted SQL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierNode {
    pub name: String,
}

impl IdentifierNode {
    pub fn create(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A table reference, optionally schema-qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    pub schema: Option<IdentifierNode>,
    pub identifier: IdentifierNode,
}

impl TableNode {
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            identifier: IdentifierNode::create(name),
        }
    }

    pub fn create_with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(IdentifierNode::create(schema)),
            identifier: IdentifierNode::create(name),
        }
    }
}

/// A column data type, stored as dialect-ready text (e.g. `varchar(255)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeNode {
    pub data_type: String,
}

impl DataTypeNode {
    pub fn create(data_type: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
        }
    }
}

/// A scalar value.
///
/// Immediate values are inlined as SQL literals when compiled; DDL positions
/// such as column defaults do not accept bind placeholders. Non-immediate
/// values compile to a dialect placeholder plus a bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueNode {
    pub value: Value,
    pub immediate: bool,
}

impl ValueNode {
    pub fn create(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            immediate: false,
        }
    }

    pub fn create_immediate(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            immediate: true,
        }
    }
}

/// A raw SQL fragment spliced verbatim into the compiled statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode {
    pub sql: String,
}

impl RawNode {
    pub fn create(sql: impl Into<String>) -> Self {
        Self { sql: sql.into() }
    }
}

/// Referential action applied when a referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Cascade,
    SetNull,
    Restrict,
    NoAction,
}

/// A foreign-key reference attached to a column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencesNode {
    pub table: TableNode,
    pub column: IdentifierNode,
    pub on_delete: Option<OnDelete>,
}

impl ReferencesNode {
    pub fn create(table: TableNode, column: impl Into<String>) -> Self {
        Self {
            table,
            column: IdentifierNode::create(column),
            on_delete: None,
        }
    }

    pub fn clone_with_on_delete(&self, on_delete: OnDelete) -> Self {
        Self {
            on_delete: Some(on_delete),
            ..self.clone()
        }
    }
}

/// A CHECK constraint whose expression is caller-supplied SQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConstraintNode {
    pub expression: RawNode,
}

impl CheckConstraintNode {
    pub fn create(expression: impl Into<String>) -> Self {
        Self {
            expression: RawNode::create(expression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_with_on_delete_leaves_original_unchanged() {
        let refs = ReferencesNode::create(TableNode::create("person"), "id");
        let with_action = refs.clone_with_on_delete(OnDelete::Cascade);

        assert_eq!(refs.on_delete, None);
        assert_eq!(with_action.on_delete, Some(OnDelete::Cascade));
        assert_eq!(with_action.table, refs.table);
        assert_eq!(with_action.column, refs.column);
    }

    #[test]
    fn test_value_node_immediate_flag() {
        assert!(!ValueNode::create("anon").immediate);
        assert!(ValueNode::create_immediate("anon").immediate);
    }
}
