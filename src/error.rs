//! Error types for node construction and the three pipeline stages.

use crate::ast::NodeKind;
use thiserror::Error;

/// Construction error raised by a node factory.
///
/// Most malformed inputs are rejected at compile time by struct typing; these
/// are the cases that can only be detected at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    /// A column reference string did not have the `table.column` shape.
    #[error("invalid column reference `{0}`: expected `table.column`")]
    InvalidReference(String),

    /// `on_delete` was requested for a column that has no foreign key
    /// reference to attach it to.
    #[error("`on_delete` called on column `{0}` before `references`")]
    OnDeleteWithoutReferences(String),
}

/// Failure in the transform stage. Aborts the statement before compilation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("transformer `{transformer}` failed: {reason}")]
    Failed { transformer: String, reason: String },

    #[error("transformer `{transformer}` changed the root node kind from {from} to {to}")]
    RootKindChanged {
        transformer: String,
        from: NodeKind,
        to: NodeKind,
    },
}

/// Failure in the compile stage: a node shape the active dialect cannot
/// express. The execute stage is never reached.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("node kind {0} cannot be compiled in this position")]
    UnsupportedNode(NodeKind),

    #[error("ALTER TABLE statement specifies no operation")]
    EmptyAlterTable,

    #[error("ALTER TABLE statement specifies more than one operation")]
    ConflictingAlterTable,

    #[error("ALTER COLUMN `{0}` specifies no refinement")]
    EmptyAlterColumn(String),

    #[error("a {0} value cannot be rendered as a SQL literal")]
    UnrepresentableLiteral(&'static str),
}

/// Failure in the execute stage, propagated unchanged from the driver.
/// Never retried by this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("database error: {0}")]
    Database(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Umbrella error returned by builder terminal methods.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}
