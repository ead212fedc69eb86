//! Raw SQL fragments.

use crate::ast::common::RawNode;
use crate::ast::{OperationNode, OperationNodeSource};

/// A caller-supplied SQL fragment, usable anywhere a node source is accepted
/// (column defaults, data types, check expressions).
///
/// The fragment is spliced verbatim; it is the caller's responsibility not to
/// interpolate untrusted input into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    sql: String,
}

/// Creates a raw fragment, e.g. `raw("now()")`.
pub fn raw(sql: impl Into<String>) -> Raw {
    Raw { sql: sql.into() }
}

impl OperationNodeSource for Raw {
    fn to_operation_node(&self) -> OperationNode {
        OperationNode::Raw(RawNode::create(self.sql.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    #[test]
    fn test_raw_produces_raw_node() {
        let node = raw("now()").to_operation_node();
        assert!(node.is(NodeKind::Raw));
        assert_eq!(node, OperationNode::Raw(RawNode::create("now()")));
    }
}
