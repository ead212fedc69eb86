//! Builders for the ALTER TABLE statement family.
//!
//! The call graph resolves every statement to exactly one operation:
//! `rename_to`, `set_schema`, `drop_column` and `rename_column` are fully
//! specified in one call and yield a terminal [`AlterTableExecutor`];
//! `alter_column` narrows to an [`AlterColumnBuilder`] whose refinements each
//! yield a terminal; `add_column` narrows to an
//! [`AlterTableAddColumnBuilder`] that folds refinements until a terminal
//! method is called. Every operation clones from the untouched initial node,
//! so two operations can never accumulate on one statement.

use std::sync::Arc;

use crate::ast::alter_table::{
    AddColumnNode, AlterColumnNode, AlterTableNode, DropColumnNode, RenameColumnNode,
};
use crate::ast::column::ColumnDefinitionNode;
use crate::ast::common::{DataTypeNode, IdentifierNode, OnDelete, TableNode, ValueNode};
use crate::ast::{OperationNode, OperationNodeSource};
use crate::build::column::ColumnDefinitionBuilder;
use crate::error::{NodeError, QueryError};
use crate::executor::{CompiledQuery, ExecuteResult, QueryExecutor, QueryId};
use crate::guard::ExecutionGuard;
use crate::value::Value;

/// Initial builder state: one method per legal single alteration.
#[derive(Clone)]
#[must_use = "an ALTER TABLE statement does nothing until an operation is chosen and executed"]
pub struct AlterTableBuilder {
    query_id: QueryId,
    node: AlterTableNode,
    executor: Arc<dyn QueryExecutor>,
}

impl AlterTableBuilder {
    pub fn new(query_id: QueryId, node: AlterTableNode, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            query_id,
            node,
            executor,
        }
    }

    pub fn rename_to(&self, new_table_name: &str) -> AlterTableExecutor {
        AlterTableExecutor::new(
            self.query_id,
            self.node
                .clone_with_rename_to(TableNode::create(new_table_name)),
            self.executor.clone(),
        )
    }

    pub fn set_schema(&self, new_schema: &str) -> AlterTableExecutor {
        AlterTableExecutor::new(
            self.query_id,
            self.node
                .clone_with_set_schema(IdentifierNode::create(new_schema)),
            self.executor.clone(),
        )
    }

    pub fn drop_column(&self, column: &str) -> AlterTableExecutor {
        AlterTableExecutor::new(
            self.query_id,
            self.node
                .clone_with_drop_column(DropColumnNode::create(column)),
            self.executor.clone(),
        )
    }

    pub fn rename_column(&self, column: &str, new_column: &str) -> AlterTableExecutor {
        AlterTableExecutor::new(
            self.query_id,
            self.node
                .clone_with_rename_column(RenameColumnNode::create(column, new_column)),
            self.executor.clone(),
        )
    }

    pub fn alter_column(&self, column: &str) -> AlterColumnBuilder {
        AlterColumnBuilder {
            query_id: self.query_id,
            table_node: self.node.clone(),
            column_node: AlterColumnNode::create(column),
            executor: self.executor.clone(),
        }
    }

    pub fn add_column(&self, column: &str, data_type: &str) -> AlterTableAddColumnBuilder {
        AlterTableAddColumnBuilder::new(
            self.query_id,
            self.node.clone(),
            ColumnDefinitionBuilder::new(ColumnDefinitionNode::create(
                column,
                OperationNode::DataType(DataTypeNode::create(data_type)),
            )),
            self.executor.clone(),
        )
    }
}

/// Builder state after `alter_column`. Each refinement independently resolves
/// the statement; calling two refinements on the same builder produces two
/// sibling terminals, both built from the unmodified original node.
#[derive(Clone)]
#[must_use = "an ALTER COLUMN statement does nothing until a refinement is chosen and executed"]
pub struct AlterColumnBuilder {
    query_id: QueryId,
    table_node: AlterTableNode,
    column_node: AlterColumnNode,
    executor: Arc<dyn QueryExecutor>,
}

impl AlterColumnBuilder {
    fn resolve(&self, column_node: AlterColumnNode) -> AlterTableExecutor {
        AlterTableExecutor::new(
            self.query_id,
            self.table_node.clone_with_alter_column(column_node),
            self.executor.clone(),
        )
    }

    pub fn set_data_type(&self, data_type: &str) -> AlterTableExecutor {
        self.resolve(
            self.column_node
                .clone_with_data_type(DataTypeNode::create(data_type)),
        )
    }

    /// Sets the column default, inlined as a literal when compiled.
    pub fn set_default(&self, value: impl Into<Value>) -> AlterTableExecutor {
        self.resolve(
            self.column_node
                .clone_with_set_default(OperationNode::Value(ValueNode::create_immediate(value))),
        )
    }

    /// Sets the column default from a pre-built fragment, e.g. `raw("now()")`.
    pub fn set_default_expr(&self, source: &dyn OperationNodeSource) -> AlterTableExecutor {
        self.resolve(
            self.column_node
                .clone_with_set_default(source.to_operation_node()),
        )
    }

    pub fn drop_default(&self) -> AlterTableExecutor {
        self.resolve(self.column_node.clone_with_drop_default())
    }

    pub fn set_not_null(&self) -> AlterTableExecutor {
        self.resolve(self.column_node.clone_with_set_not_null())
    }

    pub fn drop_not_null(&self) -> AlterTableExecutor {
        self.resolve(self.column_node.clone_with_drop_not_null())
    }
}

/// Terminal state of an ALTER TABLE statement: the operation is fully
/// specified and only `to_operation_node`, `compile` and `execute` remain.
#[derive(Clone)]
#[must_use = "the statement is not executed until `execute()` is called"]
pub struct AlterTableExecutor {
    query_id: QueryId,
    node: AlterTableNode,
    executor: Arc<dyn QueryExecutor>,
    guard: ExecutionGuard,
}

impl AlterTableExecutor {
    fn new(query_id: QueryId, node: AlterTableNode, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            query_id,
            node,
            executor,
            guard: ExecutionGuard::new("AlterTableExecutor"),
        }
    }

    /// Resolves the statement through the transform stage and returns the
    /// fully materialized node tree.
    pub fn to_operation_node(&self) -> Result<OperationNode, QueryError> {
        self.guard.disarm();
        self.executor
            .transform_query(OperationNode::AlterTable(self.node.clone()), self.query_id)
    }

    /// Compiles the statement. Repeatable, deterministic, side-effect free.
    pub fn compile(&self) -> Result<CompiledQuery, QueryError> {
        self.guard.disarm();
        let node = self.to_operation_node()?;
        self.executor.compile_query(&node, self.query_id)
    }

    /// Compiles and runs the statement against the external store.
    pub async fn execute(&self) -> Result<ExecuteResult, QueryError> {
        self.guard.disarm();
        let query = self.compile()?;
        self.executor.execute_query(query, self.query_id).await
    }
}

/// Builder state after `add_column`. Refinements fold into the pending column
/// definition; the terminal triad is available at every step.
#[derive(Clone)]
#[must_use = "the statement is not executed until `execute()` is called"]
pub struct AlterTableAddColumnBuilder {
    query_id: QueryId,
    node: AlterTableNode,
    column_builder: ColumnDefinitionBuilder,
    executor: Arc<dyn QueryExecutor>,
    guard: ExecutionGuard,
}

impl AlterTableAddColumnBuilder {
    fn new(
        query_id: QueryId,
        node: AlterTableNode,
        column_builder: ColumnDefinitionBuilder,
        executor: Arc<dyn QueryExecutor>,
    ) -> Self {
        Self {
            query_id,
            node,
            column_builder,
            executor,
            guard: ExecutionGuard::new("AlterTableAddColumnBuilder"),
        }
    }

    fn refine(&self, column_builder: ColumnDefinitionBuilder) -> Self {
        // The successor owns the statement from here on.
        self.guard.disarm();
        Self::new(
            self.query_id,
            self.node.clone(),
            column_builder,
            self.executor.clone(),
        )
    }

    pub fn increments(&self) -> Self {
        self.refine(self.column_builder.increments())
    }

    pub fn primary_key(&self) -> Self {
        self.refine(self.column_builder.primary_key())
    }

    /// Adds a foreign-key reference given as `table.column` or
    /// `schema.table.column`.
    pub fn references(&self, reference: &str) -> Result<Self, NodeError> {
        Ok(self.refine(self.column_builder.references(reference)?))
    }

    pub fn on_delete(&self, on_delete: OnDelete) -> Result<Self, NodeError> {
        Ok(self.refine(self.column_builder.on_delete(on_delete)?))
    }

    pub fn unique(&self) -> Self {
        self.refine(self.column_builder.unique())
    }

    pub fn not_null(&self) -> Self {
        self.refine(self.column_builder.not_null())
    }

    pub fn default_to(&self, value: impl Into<Value>) -> Self {
        self.refine(self.column_builder.default_to(value))
    }

    pub fn default_to_expr(&self, source: &dyn OperationNodeSource) -> Self {
        self.refine(self.column_builder.default_to_expr(source))
    }

    pub fn check(&self, expression: impl Into<String>) -> Self {
        self.refine(self.column_builder.check(expression))
    }

    /// Resolves the statement through the transform stage and returns the
    /// fully materialized node tree.
    pub fn to_operation_node(&self) -> Result<OperationNode, QueryError> {
        self.guard.disarm();
        let node = self.node.clone_with_add_column(AddColumnNode::create(
            self.column_builder.to_operation_node(),
        ));
        self.executor
            .transform_query(OperationNode::AlterTable(node), self.query_id)
    }

    /// Compiles the statement. Repeatable, deterministic, side-effect free.
    pub fn compile(&self) -> Result<CompiledQuery, QueryError> {
        self.guard.disarm();
        let node = self.to_operation_node()?;
        self.executor.compile_query(&node, self.query_id)
    }

    /// Compiles and runs the statement against the external store.
    pub async fn execute(&self) -> Result<ExecuteResult, QueryError> {
        self.guard.disarm();
        let query = self.compile()?;
        self.executor.execute_query(query, self.query_id).await
    }
}
