//! Programmatic SQL statement builder.
//!
//! Statements are constructed as immutable operation-node trees through
//! fluent, type-state builders, then resolved through a three-stage executor
//! pipeline: transform (structural rewrites), compile (node tree to command
//! text plus bound parameters), execute (the single side-effecting stage,
//! behind a pluggable driver).
//!
//! ```
//! use std::sync::Arc;
//! use querysmith::{DefaultQueryExecutor, NoopDriver, Postgres, Schema};
//!
//! let executor = DefaultQueryExecutor::new(Arc::new(Postgres), Arc::new(NoopDriver));
//! let schema = Schema::new(Arc::new(executor));
//!
//! let query = schema.alter_table("person").rename_to("people").compile()?;
//! assert_eq!(query.sql, r#"ALTER TABLE "person" RENAME TO "people""#);
//! assert!(query.params.is_empty());
//! # Ok::<(), querysmith::QueryError>(())
//! ```
//!
//! Builders are plain values: every method call clones the underlying node
//! and returns a new builder, so a partially built statement can be shared,
//! stored, or branched without one chain observing another.

pub mod ast;
pub mod build;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod raw;
pub mod render;
pub mod value;

mod guard;

pub use crate::ast::{NodeKind, OperationNode, OperationNodeSource};
pub use crate::build::Schema;
pub use crate::build::alter_table::{
    AlterColumnBuilder, AlterTableAddColumnBuilder, AlterTableBuilder, AlterTableExecutor,
};
pub use crate::build::column::ColumnDefinitionBuilder;
pub use crate::build::drop_index::DropIndexBuilder;
pub use crate::dialect::{Dialect, MySql, Postgres};
pub use crate::error::{CompileError, ExecuteError, NodeError, QueryError, TransformError};
pub use crate::executor::{
    CompiledQuery, DefaultQueryExecutor, ExecuteResult, NoopDriver, OperationNodeTransformer,
    QueryDriver, QueryExecutor, QueryId,
};
pub use crate::raw::{Raw, raw};
pub use crate::value::Value;
