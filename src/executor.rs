//! The three-stage pipeline every builder delegates to at its terminal step:
//! transform the node tree, compile it to a command, execute the command
//! against the external store.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::ast::OperationNode;
use crate::dialect::Dialect;
use crate::error::{ExecuteError, QueryError, TransformError};
use crate::render::{Render, Renderer};
use crate::value::Value;

/// Correlation token generated once per top-level statement and threaded
/// unchanged through every pipeline stage, so collaborators can tie multiple
/// calls to one logical statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryId(Uuid);

impl QueryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QueryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A compiled statement: dialect-specific command text plus bound parameter
/// values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Outcome of running a compiled statement against the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    pub rows_affected: u64,
}

/// A structural rewrite applied to a statement tree before compilation.
///
/// Transformers must be pure and must preserve the root node kind; the
/// executor verifies the latter after each application.
pub trait OperationNodeTransformer: Send + Sync {
    /// Name used to attribute transform failures.
    fn name(&self) -> &str;

    fn transform_node(
        &self,
        node: OperationNode,
        query_id: QueryId,
    ) -> Result<OperationNode, TransformError>;
}

/// The driver boundary: the single side-effecting stage of the pipeline.
/// Failures are propagated unchanged and never retried here.
#[async_trait]
pub trait QueryDriver: Send + Sync {
    async fn execute(
        &self,
        query: &CompiledQuery,
        query_id: QueryId,
    ) -> Result<ExecuteResult, ExecuteError>;
}

/// A driver that runs nothing and reports zero affected rows. Useful for
/// dry runs and tests that only care about compilation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDriver;

#[async_trait]
impl QueryDriver for NoopDriver {
    async fn execute(
        &self,
        _query: &CompiledQuery,
        _query_id: QueryId,
    ) -> Result<ExecuteResult, ExecuteError> {
        Ok(ExecuteResult::default())
    }
}

/// Pipeline contract consumed identically by every builder family.
///
/// An executor is supplied per builder instance, never looked up from shared
/// global state, so tests can substitute a capturing implementation.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Applies registered transformers in order. Pure; aborts the statement
    /// on the first failure.
    fn transform_query(
        &self,
        node: OperationNode,
        query_id: QueryId,
    ) -> Result<OperationNode, QueryError>;

    /// Compiles a node tree into command text plus ordered parameters.
    /// Deterministic and side-effect free.
    fn compile_query(
        &self,
        node: &OperationNode,
        query_id: QueryId,
    ) -> Result<CompiledQuery, QueryError>;

    /// Runs a compiled command against the external store.
    async fn execute_query(
        &self,
        query: CompiledQuery,
        query_id: QueryId,
    ) -> Result<ExecuteResult, QueryError>;
}

/// Default executor: registered transformers, a dialect renderer for the
/// compile stage, and a driver for the execute stage.
pub struct DefaultQueryExecutor {
    dialect: Arc<dyn Dialect>,
    transformers: Vec<Arc<dyn OperationNodeTransformer>>,
    driver: Arc<dyn QueryDriver>,
}

impl DefaultQueryExecutor {
    pub fn new(dialect: Arc<dyn Dialect>, driver: Arc<dyn QueryDriver>) -> Self {
        Self {
            dialect,
            transformers: Vec::new(),
            driver,
        }
    }

    /// Registers a transformer. Transformers run in registration order.
    pub fn with_transformer(mut self, transformer: Arc<dyn OperationNodeTransformer>) -> Self {
        self.transformers.push(transformer);
        self
    }
}

#[async_trait]
impl QueryExecutor for DefaultQueryExecutor {
    fn transform_query(
        &self,
        node: OperationNode,
        query_id: QueryId,
    ) -> Result<OperationNode, QueryError> {
        let root_kind = node.kind();
        let mut node = node;
        for transformer in &self.transformers {
            node = transformer.transform_node(node, query_id)?;
            if node.kind() != root_kind {
                return Err(TransformError::RootKindChanged {
                    transformer: transformer.name().to_string(),
                    from: root_kind,
                    to: node.kind(),
                }
                .into());
            }
            debug!(%query_id, transformer = transformer.name(), "applied transformer");
        }
        Ok(node)
    }

    fn compile_query(
        &self,
        node: &OperationNode,
        query_id: QueryId,
    ) -> Result<CompiledQuery, QueryError> {
        let mut renderer = Renderer::new(self.dialect.as_ref());
        node.render(&mut renderer)?;
        let query = renderer.finish();
        debug!(%query_id, sql = %query.sql, params = query.params.len(), "compiled statement");
        Ok(query)
    }

    async fn execute_query(
        &self,
        query: CompiledQuery,
        query_id: QueryId,
    ) -> Result<ExecuteResult, QueryError> {
        debug!(%query_id, sql = %query.sql, "executing statement");
        let result = self.driver.execute(&query, query_id).await?;
        debug!(%query_id, rows_affected = result.rows_affected, "statement executed");
        Ok(result)
    }
}
