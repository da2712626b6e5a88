//! AST to DOT (Graphviz) conversion.
//!
//! The generated graph can be rendered with `dot`, `neato`, or any online viewer.
//!
//! # DOT Format
//!
//! - Every AST node gets one declaration line. Node ids (`n0`, `n1`, ...) follow a
//!   pre-order traversal, so equal trees always produce byte-identical output.
//! - **Operator nodes** are labeled `&&`, `||` or `!` and drawn with [`DotConfig::node_shape`].
//! - **Leaves** are labeled with the variable identifier and drawn with [`DotConfig::leaf_shape`].
//! - **Edges** point from parent to child: one for `!`, two (left, then right) for `&&`/`||`.
//!
//! # Examples
//!
//! ```
//! use bool_sat::dot::to_dot;
//! use bool_sat::parser::parse;
//!
//! let ast = parse("a && !b").unwrap();
//! let dot = to_dot(&ast).unwrap();
//! assert!(dot.starts_with("digraph ast {"));
//! assert!(dot.contains("n0 -> n1;"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::Write as _;

use crate::ast::Node;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Name of the graph (default: "ast")
    pub graph_name: &'static str,
    /// Shape for operator nodes (default: "ellipse")
    pub node_shape: &'static str,
    /// Shape for variable leaves (default: "box")
    pub leaf_shape: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            graph_name: "ast",
            node_shape: "ellipse",
            leaf_shape: "box",
        }
    }
}

/// Converts an AST to DOT format using the default configuration.
pub fn to_dot(root: &Node) -> Result<String, std::fmt::Error> {
    to_dot_with_config(root, &DotConfig::default())
}

/// Converts an AST to DOT format with custom configuration.
///
/// ```
/// use bool_sat::ast::Node;
/// use bool_sat::dot::{to_dot_with_config, DotConfig};
///
/// let config = DotConfig {
///     leaf_shape: "circle",
///     ..DotConfig::default()
/// };
/// let dot = to_dot_with_config(&Node::var("x"), &config).unwrap();
/// assert!(dot.contains("n0 [label=\"x\", shape=circle];"));
/// ```
pub fn to_dot_with_config(root: &Node, config: &DotConfig) -> Result<String, std::fmt::Error> {
    let mut dot = String::new();
    writeln!(dot, "digraph {} {{", config.graph_name)?;
    writeln!(dot, "node [shape={}];", config.node_shape)?;

    // Pre-order walk; each stack entry carries the id of its parent.
    let mut next_id = 0usize;
    let mut stack: Vec<(&Node, Option<usize>)> = vec![(root, None)];
    let mut edges = Vec::new();
    while let Some((node, parent)) = stack.pop() {
        let id = next_id;
        next_id += 1;

        let label = escape(node.label());
        if node.is_leaf() {
            writeln!(dot, "n{} [label=\"{}\", shape={}];", id, label, config.leaf_shape)?;
        } else {
            writeln!(dot, "n{} [label=\"{}\"];", id, label)?;
        }
        if let Some(parent) = parent {
            edges.push((parent, id));
        }

        // Push in reverse so the left child is visited first.
        for child in node.children().into_iter().rev() {
            stack.push((child, Some(id)));
        }
    }

    for (parent, child) in edges {
        writeln!(dot, "n{} -> n{};", parent, child)?;
    }

    writeln!(dot, "}}")?;
    Ok(dot)
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
