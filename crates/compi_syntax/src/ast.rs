//! Syntax-tree node types for the Compi parser.

use std::fmt;

/// Syntactic kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    Declaration,
    Statement,
    Assignment,
    Condition,
    Expression,
    Term,
    /// Part of the vocabulary but never produced: the factor rule returns
    /// identifier, constant, or parenthesized-expression nodes directly.
    Factor,
    Identifier,
    Constant,
    Operator,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "Program",
            NodeKind::Declaration => "Declaration",
            NodeKind::Statement => "Statement",
            NodeKind::Assignment => "Assignment",
            NodeKind::Condition => "Condition",
            NodeKind::Expression => "Expression",
            NodeKind::Term => "Term",
            NodeKind::Factor => "Factor",
            NodeKind::Identifier => "Identifier",
            NodeKind::Constant => "Constant",
            NodeKind::Operator => "Operator",
        };
        write!(f, "{}", name)
    }
}

/// A node in the syntax tree.
///
/// Children are exclusively owned and stored in left-to-right derivation
/// order. Terminal nodes (`Identifier`, `Constant`, `Operator`) have no
/// children. Nodes are built bottom-up -- a node is constructed only after
/// all of its children are complete -- and never mutated after being
/// attached to a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    pub kind: NodeKind,
    pub label: String,
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Construct a childless node.
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Attach a fully-built child.
    pub fn push(&mut self, child: AstNode) {
        self.children.push(child);
    }
}

impl fmt::Display for AstNode {
    /// External display form for one node: `<Kind>: <Label>`. Tree layout
    /// (indentation, traversal order) is the caller's concern.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form() {
        let node = AstNode::new(NodeKind::Program, "Program");
        assert_eq!(node.to_string(), "Program: Program");

        let node = AstNode::new(NodeKind::Constant, "42");
        assert_eq!(node.to_string(), "Constant: 42");
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut node = AstNode::new(NodeKind::Expression, "Expression");
        node.push(AstNode::new(NodeKind::Term, "Term"));
        node.push(AstNode::new(NodeKind::Operator, "+"));
        node.push(AstNode::new(NodeKind::Term, "Term"));
        let kinds: Vec<NodeKind> = node.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Term, NodeKind::Operator, NodeKind::Term]);
    }
}
