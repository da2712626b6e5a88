//! Error type shared by the whole pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::eval::EvalError;
use crate::parser::ParseError;
use crate::token::LexError;

#[derive(Debug)]
pub enum Error {
    /// The input file could not be read.
    Input { path: PathBuf, source: io::Error },
    /// The expression contains a character no token starts with.
    Lex(LexError),
    /// The token sequence does not form an expression.
    Parse(ParseError),
    /// Evaluation hit an identifier missing from the assignment.
    /// This is a bug in variable collection, never a user error.
    Eval(EvalError),
    /// Too many distinct variables to enumerate.
    TooManyVariables { count: usize, max: usize },
    /// Rendering the DOT graph failed.
    Dot(fmt::Error),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Error::Eval(e)
    }
}

impl From<fmt::Error> for Error {
    fn from(e: fmt::Error) -> Self {
        Error::Dot(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input { path, .. } => write!(f, "cannot read '{}'", path.display()),
            Error::Lex(e) => write!(f, "Lex error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Eval(e) => write!(f, "Internal error: {}", e),
            Error::TooManyVariables { count, max } => {
                write!(f, "Expression has {} distinct variables, at most {} are supported", count, max)
            }
            Error::Dot(e) => write!(f, "DOT rendering failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input { source, .. } => Some(source),
            // Inner messages are already part of `Display`.
            _ => None,
        }
    }
}
