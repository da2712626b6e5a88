//! # bool-sat: exhaustive satisfiability for boolean expressions
//!
//! **`bool-sat`** parses a propositional formula written with `&&`, `||`, `!`, parentheses
//! and identifiers, builds its abstract syntax tree, and decides satisfiability by
//! evaluating the formula under **every** truth assignment of its distinct variables.
//!
//! There is no clever solving here: `n` variables means `2^n` evaluations.
//! That is the point. The output is simple and fully deterministic.
//!
//! ## Precedence
//!
//! `!` binds tightest, then `&&`, then `||`. Binary operators are left-associative,
//! and parentheses override precedence:
//!
//! ```rust
//! use bool_sat::parser::parse;
//!
//! assert_eq!(parse("a || b && c").unwrap(), parse("a || (b && c)").unwrap());
//! assert_eq!(parse("a && b && c").unwrap(), parse("(a && b) && c").unwrap());
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use bool_sat::report::Report;
//! use bool_sat::sat::Mode;
//!
//! // Parse, render, and evaluate under all assignments
//! let report = Report::build("(a || b) && (!a || !b)", Mode::Normal).unwrap();
//!
//! // Only satisfying assignments, sorted
//! assert_eq!(report.lines(), ["a: false, b: true", "a: true, b: false"]);
//!
//! // Debug mode lists every assignment together with the result
//! let report = Report::build("a", Mode::Debug).unwrap();
//! assert_eq!(report.lines(), ["a: false, false", "a: true, true"]);
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]** and **[`parser`]**: from text to [`Node`][crate::ast::Node].
//! - **[`dot`]**: Graphviz rendering of the AST.
//! - **[`sat`]**: exhaustive enumeration of assignments and satisfiability queries.
//! - **[`report`]**: sorting and printing of the final result.

pub mod assignment;
pub mod ast;
pub mod dot;
pub mod error;
pub mod eval;
pub mod parser;
pub mod report;
pub mod sat;
pub mod token;

pub use error::Error;
