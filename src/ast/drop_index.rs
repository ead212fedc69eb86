//! Nodes for the DROP INDEX statement family.

use crate::ast::common::IdentifierNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIndexModifier {
    IfExists,
}

/// Root of a DROP INDEX statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndexNode {
    pub name: IdentifierNode,
    pub modifier: Option<DropIndexModifier>,
}

impl DropIndexNode {
    pub fn create(name: impl Into<String>) -> Self {
        Self {
            name: IdentifierNode::create(name),
            modifier: None,
        }
    }

    pub fn clone_with_modifier(&self, modifier: DropIndexModifier) -> Self {
        Self {
            modifier: Some(modifier),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_with_modifier_leaves_original_unchanged() {
        let node = DropIndexNode::create("idx_name");
        let conditional = node.clone_with_modifier(DropIndexModifier::IfExists);

        assert_eq!(node.modifier, None);
        assert_eq!(conditional.modifier, Some(DropIndexModifier::IfExists));
        assert_eq!(conditional.name, node.name);
    }
}
