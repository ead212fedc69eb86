//! Builder for the DROP INDEX statement family.

use std::sync::Arc;

use crate::ast::OperationNode;
use crate::ast::drop_index::{DropIndexModifier, DropIndexNode};
use crate::error::QueryError;
use crate::executor::{CompiledQuery, ExecuteResult, QueryExecutor, QueryId};
use crate::guard::ExecutionGuard;

/// Terminal-capable builder over a DROP INDEX statement.
#[derive(Clone)]
#[must_use = "the statement is not executed until `execute()` is called"]
pub struct DropIndexBuilder {
    query_id: QueryId,
    node: DropIndexNode,
    executor: Arc<dyn QueryExecutor>,
    guard: ExecutionGuard,
}

impl DropIndexBuilder {
    pub fn new(query_id: QueryId, node: DropIndexNode, executor: Arc<dyn QueryExecutor>) -> Self {
        Self {
            query_id,
            node,
            executor,
            guard: ExecutionGuard::new("DropIndexBuilder"),
        }
    }

    /// Makes the drop conditional on the index existing.
    pub fn if_exists(&self) -> Self {
        self.guard.disarm();
        Self::new(
            self.query_id,
            self.node.clone_with_modifier(DropIndexModifier::IfExists),
            self.executor.clone(),
        )
    }

    /// Resolves the statement through the transform stage and returns the
    /// fully materialized node tree.
    pub fn to_operation_node(&self) -> Result<OperationNode, QueryError> {
        self.guard.disarm();
        self.executor
            .transform_query(OperationNode::DropIndex(self.node.clone()), self.query_id)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Postgres;
    use crate::executor::{DefaultQueryExecutor, NoopDriver};

    fn builder() -> DropIndexBuilder {
        let executor = Arc::new(DefaultQueryExecutor::new(
            Arc::new(Postgres),
            Arc::new(NoopDriver),
        ));
        DropIndexBuilder::new(QueryId::new(), DropIndexNode::create("idx_name"), executor)
    }

    #[test]
    fn test_compile_drop_index() {
        let query = builder().compile().unwrap();
        assert_eq!(query.sql, r#"DROP INDEX "idx_name""#);
        assert!(query.params.is_empty());
    }

    #[test]
    fn test_if_exists_yields_new_builder() {
        let plain = builder();
        let conditional = plain.if_exists();

        assert_eq!(
            conditional.compile().unwrap().sql,
            r#"DROP INDEX IF EXISTS "idx_name""#
        );
        // The original builder still compiles the unconditional form.
        assert_eq!(plain.compile().unwrap().sql, r#"DROP INDEX "idx_name""#);
    }

    #[tokio::test]
    async fn test_execute_completes() {
        let result = builder().if_exists().execute().await.unwrap();
        assert_eq!(result.rows_affected, 0);
    }
}
