//! Recursive-descent parser for boolean expressions.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! Or   := And ( '||' And )*
//! And  := Not ( '&&' Not )*
//! Not  := '!' Not | Atom
//! Atom := Identifier | '(' Or ')'
//! ```
//!
//! Both binary operators are left-associative, `!` nests to the right, and parentheses
//! reset precedence. The parser looks one token ahead and never backtracks.
//!
//! Both the nesting of `!` and `(` and the depth of the resulting tree are capped at
//! [`MAX_DEPTH`], so every recursive walk over a parsed tree stays within the stack.

use std::fmt;

use log::debug;

use crate::ast::Node;
use crate::error::Error;
use crate::token::{tokenize, Lexeme, Token};

/// Maximum nesting of `!`/`(` and maximum depth of the parsed tree.
pub const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// The expression contains no tokens at all.
    Empty,
    /// Input ended while more was required.
    UnexpectedEnd { expected: &'static str },
    /// A token appeared where it cannot.
    UnexpectedToken {
        found: Token,
        offset: usize,
        expected: &'static str,
    },
    /// A complete expression was parsed but tokens remain.
    TrailingToken { found: Token, offset: usize },
    /// Nesting or tree depth exceeds [`MAX_DEPTH`] at the token starting at `offset`.
    TooDeep { offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty expression"),
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of expression, expected {}", expected)
            }
            ParseError::UnexpectedToken {
                found,
                offset,
                expected,
            } => write!(f, "unexpected '{}' at position {}, expected {}", found, offset, expected),
            ParseError::TrailingToken { found, offset } => {
                write!(f, "unexpected trailing '{}' at position {}", found, offset)
            }
            ParseError::TooDeep { offset } => {
                write!(f, "expression nested deeper than {} levels at position {}", MAX_DEPTH, offset)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Tokenizes and parses `input` into an AST.
///
/// ```
/// use bool_sat::ast::Node;
/// use bool_sat::parser::parse;
///
/// let ast = parse("a || b && c").unwrap();
/// let expected = Node::or(Node::var("a"), Node::and(Node::var("b"), Node::var("c")));
/// assert_eq!(ast, expected);
/// ```
pub fn parse(input: &str) -> Result<Node, Error> {
    let tokens = tokenize(input)?;
    let ast = parse_tokens(&tokens)?;
    debug!("Parsed {} tokens into AST of size {} and depth {}", tokens.len(), ast.size(), ast.depth());
    Ok(ast)
}

/// Parses an already tokenized expression.
///
/// The whole token sequence must form exactly one expression.
pub fn parse_tokens(tokens: &[Lexeme]) -> Result<Node, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        nesting: 0,
    };
    let (ast, _) = parser.or()?;
    if let Some(lexeme) = parser.peek() {
        return Err(ParseError::TrailingToken {
            found: lexeme.token.clone(),
            offset: lexeme.offset,
        });
    }
    Ok(ast)
}

/// Rejects a subtree whose depth exceeds [`MAX_DEPTH`].
fn check_depth(depth: usize, offset: usize) -> Result<usize, ParseError> {
    if depth > MAX_DEPTH {
        Err(ParseError::TooDeep { offset })
    } else {
        Ok(depth)
    }
}

/// Every rule returns the parsed subtree together with its depth.
struct Parser<'a> {
    tokens: &'a [Lexeme],
    pos: usize,
    /// Number of `!` and `(` currently open.
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Lexeme> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Lexeme> {
        let lexeme = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(lexeme)
    }

    /// Consumes the next token if it equals `token`, returning its offset.
    fn eat(&mut self, token: &Token) -> Option<usize> {
        match self.peek() {
            Some(lexeme) if lexeme.token == *token => {
                self.pos += 1;
                Some(lexeme.offset)
            }
            _ => None,
        }
    }

    /// Runs `rule` one nesting level deeper, opened by the token at `offset`.
    fn nested<T, F>(&mut self, offset: usize, rule: F) -> Result<T, ParseError>
    where
        F: FnOnce(&mut Self) -> Result<T, ParseError>,
    {
        if self.nesting >= MAX_DEPTH {
            return Err(ParseError::TooDeep { offset });
        }
        self.nesting += 1;
        let result = rule(self);
        self.nesting -= 1;
        result
    }

    fn or(&mut self) -> Result<(Node, usize), ParseError> {
        let (mut lhs, mut depth) = self.and()?;
        while let Some(offset) = self.eat(&Token::Or) {
            let (rhs, rhs_depth) = self.and()?;
            depth = check_depth(1 + depth.max(rhs_depth), offset)?;
            lhs = Node::or(lhs, rhs);
        }
        Ok((lhs, depth))
    }

    fn and(&mut self) -> Result<(Node, usize), ParseError> {
        let (mut lhs, mut depth) = self.not()?;
        while let Some(offset) = self.eat(&Token::And) {
            let (rhs, rhs_depth) = self.not()?;
            depth = check_depth(1 + depth.max(rhs_depth), offset)?;
            lhs = Node::and(lhs, rhs);
        }
        Ok((lhs, depth))
    }

    fn not(&mut self) -> Result<(Node, usize), ParseError> {
        if let Some(offset) = self.eat(&Token::Not) {
            let (operand, depth) = self.nested(offset, Self::not)?;
            let depth = check_depth(depth + 1, offset)?;
            Ok((Node::not(operand), depth))
        } else {
            self.atom()
        }
    }

    fn atom(&mut self) -> Result<(Node, usize), ParseError> {
        const OPERAND: &str = "identifier, '!' or '('";

        let lexeme = self.next().ok_or(ParseError::UnexpectedEnd { expected: OPERAND })?;
        match &lexeme.token {
            Token::Ident(id) => Ok((Node::var(id.as_str()), 0)),
            Token::LParen => {
                let inner = self.nested(lexeme.offset, Self::or)?;
                match self.next() {
                    Some(Lexeme {
                        token: Token::RParen, ..
                    }) => Ok(inner),
                    Some(other) => Err(ParseError::UnexpectedToken {
                        found: other.token.clone(),
                        offset: other.offset,
                        expected: "')'",
                    }),
                    None => Err(ParseError::UnexpectedEnd { expected: "')'" }),
                }
            }
            token => Err(ParseError::UnexpectedToken {
                found: token.clone(),
                offset: lexeme.offset,
                expected: OPERAND,
            }),
        }
    }
}
