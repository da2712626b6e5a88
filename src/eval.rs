use std::fmt;

use crate::assignment::Assignment;
use crate::ast::Node;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EvalError {
    /// The identifier has no value in the assignment.
    Unbound(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Unbound(id) => write!(f, "variable '{}' is missing from the assignment", id),
        }
    }
}

impl std::error::Error for EvalError {}

pub trait Eval {
    fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError>;
}

impl Assignment {
    pub fn eval(&self, value: &impl Eval) -> Result<bool, EvalError> {
        value.eval(self)
    }
}

impl Eval for Node {
    fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Node::Var(id) => assignment.get(id).ok_or_else(|| EvalError::Unbound(id.clone())),
            Node::Not(a) => Ok(!a.eval(assignment)?),
            // `?` inside the second operand only runs when it is evaluated.
            Node::And(a, b) => Ok(a.eval(assignment)? && b.eval(assignment)?),
            Node::Or(a, b) => Ok(a.eval(assignment)? || b.eval(assignment)?),
        }
    }
}
