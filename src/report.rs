//! Final report: the expression, its AST as DOT, and the sorted assignment lines.

use std::io::{self, Write};

use log::info;

use crate::ast::Node;
use crate::dot::to_dot;
use crate::error::Error;
use crate::parser::parse;
use crate::sat::{exhaustive_search, Mode};

/// Drops empty lines and sorts the rest in ascending byte order.
pub fn format_lines(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut lines: Vec<String> = lines.into_iter().filter(|line| !line.is_empty()).collect();
    lines.sort_unstable();
    lines
}

/// Writes each line followed by a newline.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Report {
    expression: String,
    ast: Node,
    dot: String,
    mode: Mode,
    lines: Vec<String>,
}

impl Report {
    /// Parses `expression`, renders its AST and evaluates it under every assignment.
    ///
    /// Nothing is produced unless every stage succeeds.
    ///
    /// ```
    /// use bool_sat::report::Report;
    /// use bool_sat::sat::Mode;
    ///
    /// let report = Report::build("a || !a", Mode::Normal).unwrap();
    /// assert_eq!(report.lines(), ["a: false", "a: true"]);
    /// ```
    pub fn build(expression: &str, mode: Mode) -> Result<Self, Error> {
        let ast = parse(expression)?;
        let dot = to_dot(&ast)?;
        let lines = format_lines(exhaustive_search(&ast, mode)?);
        info!("Expression has {} variables, {} report lines", ast.vars().len(), lines.len());
        Ok(Self {
            expression: expression.to_string(),
            ast,
            dot,
            mode,
            lines,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn ast(&self) -> &Node {
        &self.ast
    }

    pub fn dot(&self) -> &str {
        &self.dot
    }

    /// Sorted non-empty report lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_satisfiable(&self) -> bool {
        match self.mode {
            Mode::Normal => !self.lines.is_empty(),
            Mode::Debug => self.lines.iter().any(|line| line.ends_with("true")),
        }
    }

    /// Writes the expression, the DOT graph, and the report lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.expression)?;
        // The DOT text already ends with a newline.
        write!(out, "{}", self.dot)?;
        write_lines(out, &self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_format_lines_filters_and_sorts() {
        let lines = vec![
            "b: true".to_string(),
            String::new(),
            "a: true".to_string(),
            String::new(),
            "a: false".to_string(),
        ];
        assert_eq!(format_lines(lines), vec!["a: false", "a: true", "b: true"]);
    }

    #[test]
    fn test_format_lines_byte_order() {
        let lines = vec!["a".to_string(), "B".to_string(), "_".to_string()];
        assert_eq!(format_lines(lines), vec!["B", "_", "a"]);
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_lines(&mut out, &["x".to_string(), "y".to_string()]).unwrap();
        assert_eq!(out, b"x\ny\n");
    }

    #[test]
    fn test_report_layout() {
        let report = Report::build("a && b", Mode::Normal).unwrap();
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = format!("a && b\n{}a: true, b: true\n", report.dot());
        assert_eq!(text, expected);
        assert!(report.is_satisfiable());
    }

    #[test]
    fn test_report_unsat() {
        let report = Report::build("a && !a", Mode::Normal).unwrap();
        assert!(report.lines().is_empty());
        assert!(!report.is_satisfiable());

        let report = Report::build("a && !a", Mode::Debug).unwrap();
        assert_eq!(report.lines(), ["a: false, false", "a: true, false"]);
        assert!(!report.is_satisfiable());
    }

    #[test]
    fn test_report_keeps_ast() {
        let report = Report::build("!x", Mode::Debug).unwrap();
        assert_eq!(report.expression(), "!x");
        assert_eq!(report.ast(), &Node::not(Node::var("x")));
    }

    #[test]
    fn test_report_fails_on_bad_input() {
        assert!(matches!(Report::build("a &&", Mode::Normal), Err(Error::Parse(_))));
        assert!(matches!(Report::build("a & b", Mode::Normal), Err(Error::Lex(_))));
    }
}
