//! Fluent, immutable statement builders.
//!
//! A builder is a cursor over a node under construction: the statement's
//! [`QueryId`](crate::executor::QueryId), the current root node, and the
//! executor the terminal step will delegate to. Every method takes `&self`,
//! produces the next node through a factory clone, and returns a new builder,
//! often of a narrower type. No method mutates the builder it is called on.

pub mod alter_table;
pub mod column;
pub mod drop_index;

use std::sync::Arc;

use crate::ast::alter_table::AlterTableNode;
use crate::ast::common::TableNode;
use crate::ast::drop_index::DropIndexNode;
use crate::build::alter_table::AlterTableBuilder;
use crate::build::drop_index::DropIndexBuilder;
use crate::executor::{QueryExecutor, QueryId};

/// Entry point for schema statements.
///
/// Holds the executor every builder created from it delegates to and mints a
/// fresh [`QueryId`] per top-level statement.
#[derive(Clone)]
pub struct Schema {
    executor: Arc<dyn QueryExecutor>,
}

impl Schema {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    pub fn alter_table(&self, table: &str) -> AlterTableBuilder {
        AlterTableBuilder::new(
            QueryId::new(),
            AlterTableNode::create(TableNode::create(table)),
            self.executor.clone(),
        )
    }

    pub fn drop_index(&self, name: &str) -> DropIndexBuilder {
        DropIndexBuilder::new(
            QueryId::new(),
            DropIndexNode::create(name),
            self.executor.clone(),
        )
    }
}
