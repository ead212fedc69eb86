//! Rendering for leaf and shared nodes.

use crate::ast::OperationNode;
use crate::ast::column::ColumnDefinitionNode;
use crate::ast::common::{
    CheckConstraintNode, DataTypeNode, IdentifierNode, OnDelete, RawNode, ReferencesNode,
    TableNode, ValueNode,
};
use crate::error::CompileError;
use crate::render::{Render, Renderer};
use crate::value::Value;

impl Render for IdentifierNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str(&r.dialect.quote_identifier(&self.name));
        Ok(())
    }
}

impl Render for TableNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        if let Some(schema) = &self.schema {
            schema.render(r)?;
            r.sql.push('.');
        }
        self.identifier.render(r)
    }
}

impl Render for DataTypeNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        // Caller-supplied type text is already dialect-ready.
        r.sql.push_str(&self.data_type);
        Ok(())
    }
}

impl Render for RawNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str(&self.sql);
        Ok(())
    }
}

impl Render for ValueNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        if self.immediate {
            let literal = render_literal(&self.value)?;
            r.sql.push_str(&literal);
        } else {
            r.add_param(self.value.clone());
        }
        Ok(())
    }
}

/// Renders a value as a SQL literal for positions that do not accept bind
/// placeholders (DDL defaults).
fn render_literal(value: &Value) -> Result<String, CompileError> {
    match value {
        Value::Int(v) => Ok(v.to_string()),
        Value::Float(v) => Ok(v.to_string()),
        Value::String(v) => Ok(quote_literal(v)),
        Value::Boolean(v) => Ok(if *v { "TRUE".into() } else { "FALSE".into() }),
        Value::Json(v) => {
            let text = serde_json::to_string(v)
                .map_err(|_| CompileError::UnrepresentableLiteral("json"))?;
            Ok(quote_literal(&text))
        }
        Value::Uuid(v) => Ok(quote_literal(&v.to_string())),
        Value::Date(v) => Ok(quote_literal(&v.to_string())),
        Value::Timestamp(v) => Ok(quote_literal(&v.to_rfc3339())),
        Value::Null => Ok("NULL".into()),
        Value::Bytes(_) => Err(CompileError::UnrepresentableLiteral("binary")),
    }
}

fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

impl Render for ReferencesNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str("REFERENCES ");
        self.table.render(r)?;
        r.sql.push_str(" (");
        self.column.render(r)?;
        r.sql.push(')');
        if let Some(on_delete) = self.on_delete {
            let action = match on_delete {
                OnDelete::Cascade => "CASCADE",
                OnDelete::SetNull => "SET NULL",
                OnDelete::Restrict => "RESTRICT",
                OnDelete::NoAction => "NO ACTION",
            };
            r.sql.push_str(" ON DELETE ");
            r.sql.push_str(action);
        }
        Ok(())
    }
}

impl Render for CheckConstraintNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        r.sql.push_str("CHECK (");
        self.expression.render(r)?;
        r.sql.push(')');
        Ok(())
    }
}

impl Render for ColumnDefinitionNode {
    fn render(&self, r: &mut Renderer) -> Result<(), CompileError> {
        self.column.render(r)?;
        r.sql.push(' ');
        render_data_type_position(&self.data_type, r)?;

        if self.auto_increment {
            r.sql.push(' ');
            let modifier = r.dialect.auto_increment();
            r.sql.push_str(modifier);
        }
        if self.not_null {
            r.sql.push_str(" NOT NULL");
        }
        if self.unique {
            r.sql.push_str(" UNIQUE");
        }
        if self.primary_key {
            r.sql.push_str(" PRIMARY KEY");
        }
        if let Some(default) = &self.default_to {
            r.sql.push_str(" DEFAULT ");
            render_value_position(default, r)?;
        }
        if let Some(references) = &self.references {
            r.sql.push(' ');
            references.render(r)?;
        }
        if let Some(check) = &self.check {
            r.sql.push(' ');
            check.render(r)?;
        }
        Ok(())
    }
}

/// Renders a node standing in value position; only a scalar value or a raw
/// fragment is legal there.
pub(crate) fn render_value_position(
    node: &OperationNode,
    r: &mut Renderer,
) -> Result<(), CompileError> {
    match node {
        OperationNode::Value(value) => value.render(r),
        OperationNode::Raw(raw) => raw.render(r),
        other => Err(CompileError::UnsupportedNode(other.kind())),
    }
}

/// Renders a node standing in data-type position; only a data type or a raw
/// fragment is legal there.
pub(crate) fn render_data_type_position(
    node: &OperationNode,
    r: &mut Renderer,
) -> Result<(), CompileError> {
    match node {
        OperationNode::DataType(data_type) => data_type.render(r),
        OperationNode::Raw(raw) => raw.render(r),
        other => Err(CompileError::UnsupportedNode(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::dialect::{MySql, Postgres};

    fn render_to_query(node: &dyn Render) -> Result<crate::executor::CompiledQuery, CompileError> {
        let mut r = Renderer::new(&Postgres);
        node.render(&mut r)?;
        Ok(r.finish())
    }

    #[test]
    fn test_identifier_quoting_per_dialect() {
        let node = IdentifierNode::create("person");

        let mut pg = Renderer::new(&Postgres);
        node.render(&mut pg).unwrap();
        assert_eq!(pg.finish().sql, r#""person""#);

        let mut my = Renderer::new(&MySql);
        node.render(&mut my).unwrap();
        assert_eq!(my.finish().sql, "`person`");
    }

    #[test]
    fn test_schema_qualified_table() {
        let node = TableNode::create_with_schema("archive", "person");
        let query = render_to_query(&node).unwrap();
        assert_eq!(query.sql, r#""archive"."person""#);
    }

    #[test]
    fn test_immediate_value_renders_as_literal() {
        let node = ValueNode::create_immediate("an'on");
        let query = render_to_query(&node).unwrap();
        assert_eq!(query.sql, "'an''on'");
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_bound_value_renders_as_placeholder() {
        let node = ValueNode::create(42);
        let query = render_to_query(&node).unwrap();
        assert_eq!(query.sql, "$1");
        assert_eq!(query.params, vec![Value::Int(42)]);
    }

    #[test]
    fn test_binary_literal_is_rejected() {
        let node = ValueNode::create_immediate(Value::Bytes(vec![1, 2]));
        let err = render_to_query(&node).unwrap_err();
        assert_eq!(err, CompileError::UnrepresentableLiteral("binary"));
    }

    #[test]
    fn test_references_with_on_delete() {
        let node = ReferencesNode::create(TableNode::create("person"), "id")
            .clone_with_on_delete(OnDelete::Cascade);
        let query = render_to_query(&node).unwrap();
        assert_eq!(query.sql, r#"REFERENCES "person" ("id") ON DELETE CASCADE"#);
    }

    #[test]
    fn test_column_definition_modifier_order() {
        let node = ColumnDefinitionNode::create(
            "id",
            OperationNode::DataType(DataTypeNode::create("integer")),
        )
        .clone_with_auto_increment()
        .clone_with_unique()
        .clone_with_primary_key()
        .clone_with_check(CheckConstraintNode::create("id > 0"));

        let query = render_to_query(&node).unwrap();
        assert_eq!(
            query.sql,
            r#""id" integer GENERATED BY DEFAULT AS IDENTITY UNIQUE PRIMARY KEY CHECK (id > 0)"#
        );
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_value_in_data_type_position_is_rejected() {
        let node = OperationNode::Value(ValueNode::create(1));
        let mut r = Renderer::new(&Postgres);
        let err = render_data_type_position(&node, &mut r).unwrap_err();
        assert_eq!(err, CompileError::UnsupportedNode(NodeKind::Value));
    }
}
