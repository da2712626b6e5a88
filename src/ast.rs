//! Abstract syntax tree of a boolean expression.
//!
//! A [`Node`] is an owned tree: every operator node exclusively owns its children,
//! so there is no sharing and no cycles. The enum shape guarantees that `Not` always
//! has exactly one child and `And`/`Or` always have exactly two.

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Var(String),
    Not(Box<Node>),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

impl Node {
    /// Creates a variable leaf.
    ///
    /// # Panics
    ///
    /// Panics if `id` is empty.
    pub fn var(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.is_empty(), "Variable identifiers must be non-empty");
        Node::Var(id)
    }

    pub fn not(operand: Self) -> Self {
        Node::Not(Box::new(operand))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Node::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Node::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Operator symbol for inner nodes, identifier for leaves.
    pub fn label(&self) -> &str {
        match self {
            Node::Var(id) => id,
            Node::Not(_) => "!",
            Node::And(_, _) => "&&",
            Node::Or(_, _) => "||",
        }
    }

    /// Children in left-to-right order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Var(_) => vec![],
            Node::Not(a) => vec![a],
            Node::And(a, b) | Node::Or(a, b) => vec![a, b],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Var(_))
    }

    /// Distinct variable identifiers occurring in the tree, in ascending order.
    pub fn vars(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Var(id) => {
                    vars.insert(id.as_str());
                }
                _ => stack.extend(node.children()),
            }
        }
        vars
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Node::Var(_) => 1,
            Node::Not(a) => 1 + a.size(),
            Node::And(a, b) | Node::Or(a, b) => 1 + a.size() + b.size(),
        }
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self {
            Node::Var(_) => 0,
            Node::Not(a) => 1 + a.depth(),
            Node::And(a, b) | Node::Or(a, b) => 1 + a.depth().max(b.depth()),
        }
    }
}

/// Fully parenthesised infix form, which parses back into the same tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Var(id) => write!(f, "{}", id),
            Node::Not(a) => write!(f, "!{}", a),
            Node::And(a, b) => write!(f, "({} && {})", a, b),
            Node::Or(a, b) => write!(f, "({} || {})", a, b),
        }
    }
}
