//! End-to-end scenarios: expression in, report out.
//!
//! Tests cover the reference formulas, the precedence rules, and the output layout.

use std::collections::BTreeSet;

use bool_sat::ast::Node;
use bool_sat::eval::Eval;
use bool_sat::parser::{parse, ParseError};
use bool_sat::report::Report;
use bool_sat::sat::{exhaustive_search, Mode, Valuations};
use bool_sat::Error;

fn lines(expression: &str, mode: Mode) -> Vec<String> {
    Report::build(expression, mode).unwrap().lines().to_vec()
}

fn render(expression: &str, mode: Mode) -> String {
    let mut out = Vec::new();
    Report::build(expression, mode).unwrap().write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ─── Reference Scenarios ───────────────────────────────────────────────────────

#[test]
fn contradiction_is_unsat() {
    assert!(lines("a && !a", Mode::Normal).is_empty());
}

#[test]
fn excluded_middle_lists_both_values() {
    assert_eq!(lines("a || !a", Mode::Normal), vec!["a: false", "a: true"]);
}

#[test]
fn exclusive_or_has_two_models() {
    assert_eq!(
        lines("(a || b) && (!a || !b)", Mode::Normal),
        vec!["a: false, b: true", "a: true, b: false"]
    );
}

#[test]
fn debug_mode_appends_result() {
    assert_eq!(lines("a", Mode::Debug), vec!["a: false, false", "a: true, true"]);
}

#[test]
fn incomplete_expression_fails() {
    assert!(matches!(Report::build("a &&", Mode::Normal), Err(Error::Parse(_))));
}

#[test]
fn deeply_nested_expression_fails_cleanly() {
    let parens = format!("{}a{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(
        Report::build(&parens, Mode::Normal),
        Err(Error::Parse(ParseError::TooDeep { .. }))
    ));

    let negations = format!("{}a", "!".repeat(200_000));
    assert!(matches!(
        Report::build(&negations, Mode::Normal),
        Err(Error::Parse(ParseError::TooDeep { .. }))
    ));
}

// ─── Properties ────────────────────────────────────────────────────────────────

const FORMULAS: &[&str] = &[
    "a",
    "!a",
    "a && b",
    "a || b && c",
    "(a || b || !c) && (!a || b || c)",
    "!(x && y) || !!z",
    "(p && !q) || (!p && q) || (r && !r)",
];

#[test]
fn collected_vars_match_leaves() {
    fn leaves<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
        match node {
            Node::Var(id) => out.push(id),
            Node::Not(a) => leaves(a, out),
            Node::And(a, b) | Node::Or(a, b) => {
                leaves(a, out);
                leaves(b, out);
            }
        }
    }

    for &formula in FORMULAS {
        let ast = parse(formula).unwrap();
        let mut all = Vec::new();
        leaves(&ast, &mut all);
        let expected: BTreeSet<&str> = all.into_iter().collect();
        assert_eq!(ast.vars(), expected, "formula: {}", formula);
    }
}

#[test]
fn debug_mode_is_exhaustive_and_consistent() {
    for &formula in FORMULAS {
        let ast = parse(formula).unwrap();
        let n = ast.vars().len();
        let debug = exhaustive_search(&ast, Mode::Debug).unwrap();
        assert_eq!(debug.len(), 1 << n, "formula: {}", formula);

        for (line, assignment) in debug.iter().zip(Valuations::new(ast.vars()).unwrap()) {
            let expected = ast.eval(&assignment).unwrap();
            assert!(line.ends_with(&format!(", {}", expected)), "line: {}", line);
        }
    }
}

#[test]
fn normal_output_is_nonempty_iff_satisfiable() {
    for &formula in FORMULAS.iter().chain(&["a && !a", "(a || b) && !a && !b"]) {
        let ast = parse(formula).unwrap();
        let normal = lines(formula, Mode::Normal);
        assert!(normal.len() <= 1 << ast.vars().len());
        assert_eq!(!normal.is_empty(), ast.is_satisfiable().unwrap(), "formula: {}", formula);
    }
}

#[test]
fn normal_lines_are_sorted() {
    for &formula in FORMULAS {
        let normal = lines(formula, Mode::Normal);
        let mut sorted = normal.clone();
        sorted.sort();
        assert_eq!(normal, sorted);
    }
}

#[test]
fn output_is_deterministic() {
    for &formula in FORMULAS {
        for mode in [Mode::Normal, Mode::Debug] {
            assert_eq!(render(formula, mode), render(formula, mode));
        }
    }
}

// ─── Output Layout ─────────────────────────────────────────────────────────────

#[test]
fn output_echoes_then_graph_then_lines() {
    let text = render("a || !a", Mode::Normal);
    let expected = "\
a || !a
digraph ast {
node [shape=ellipse];
n0 [label=\"||\"];
n1 [label=\"a\", shape=box];
n2 [label=\"!\"];
n3 [label=\"a\", shape=box];
n0 -> n1;
n0 -> n2;
n2 -> n3;
}
a: false
a: true
";
    assert_eq!(text, expected);
}

#[test]
fn unsat_output_has_no_report_lines() {
    let text = render("a && !a", Mode::Normal);
    assert!(text.ends_with("}\n"));
}
