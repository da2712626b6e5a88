//! Tokenizer for boolean expressions.
//!
//! The vocabulary is small:
//!
//! - `&&` and `||` (binary operators, matched greedily),
//! - `!`, `(` and `)`,
//! - identifiers: any maximal run of characters that are neither whitespace
//!   nor one of `&`, `|`, `!`, `(`, `)`.
//!
//! Whitespace only separates tokens.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Characters that can never be part of an identifier.
const NOT_IN_IDENT: &[char] = &['&', '|', '!', '(', ')'];

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    Ident(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "{}", name),
            Token::And => write!(f, "&&"),
            Token::Or => write!(f, "||"),
            Token::Not => write!(f, "!"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// A token together with its position (char offset) in the source string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub offset: usize,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LexError {
    /// A character that does not start any token, e.g. a lone `&`.
    UnexpectedChar { ch: char, offset: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, offset } => {
                write!(f, "unexpected character '{}' at position {}", ch, offset)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Splits `input` into a sequence of tokens.
///
/// ```
/// use bool_sat::token::{tokenize, Token};
///
/// let tokens: Vec<Token> = tokenize("!a && (b || c)")
///     .unwrap()
///     .into_iter()
///     .map(|lexeme| lexeme.token)
///     .collect();
/// assert_eq!(tokens.len(), 8);
/// assert_eq!(tokens[0], Token::Not);
/// assert_eq!(tokens[2], Token::And);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, LexError> {
    let mut chars = input.char_indices().peekable();
    let mut output = Vec::new();
    // `char_indices` yields byte offsets, but diagnostics report char positions.
    let mut offset = 0;

    while let Some((_, c)) = chars.next() {
        let start = offset;
        offset += 1;
        let token = match c {
            c if c.is_whitespace() => continue,
            '!' => Token::Not,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '&' | '|' => {
                if chars.next_if(|&(_, next)| next == c).is_none() {
                    return Err(LexError::UnexpectedChar { ch: c, offset: start });
                }
                offset += 1;
                if c == '&' {
                    Token::And
                } else {
                    Token::Or
                }
            }
            _ => {
                let name = read_ident(c, &mut chars);
                offset += name.chars().count() - 1;
                Token::Ident(name)
            }
        };
        output.push(Lexeme { token, offset: start });
    }

    Ok(output)
}

fn read_ident(first: char, chars: &mut Peekable<CharIndices>) -> String {
    let mut name = String::new();
    name.push(first);
    while let Some((_, c)) = chars.next_if(|&(_, c)| !c.is_whitespace() && !NOT_IN_IDENT.contains(&c)) {
        name.push(c);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|lexeme| lexeme.token).collect()
    }

    fn ident(name: &str) -> Token {
        Token::Ident(name.to_string())
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            tokens("a && b || !c"),
            vec![ident("a"), Token::And, ident("b"), Token::Or, Token::Not, ident("c")]
        );
    }

    #[test]
    fn test_tokenize_without_spaces() {
        assert_eq!(
            tokens("(a&&!b)||c"),
            vec![
                Token::LParen,
                ident("a"),
                Token::And,
                Token::Not,
                ident("b"),
                Token::RParen,
                Token::Or,
                ident("c"),
            ]
        );
    }

    #[test]
    fn test_tokenize_long_identifiers() {
        assert_eq!(tokens("  foo_1 &&\tx42 "), vec![ident("foo_1"), Token::And, ident("x42")]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokens("").is_empty());
        assert!(tokens("   ").is_empty());
    }

    #[test]
    fn test_tokenize_offsets() {
        let offsets: Vec<usize> = tokenize("ab && !c").unwrap().iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![0, 3, 6, 7]);
    }

    #[test]
    fn test_tokenize_offsets_are_chars() {
        let lexemes = tokenize("λx || y").unwrap();
        assert_eq!(lexemes[0].token, ident("λx"));
        assert_eq!(lexemes[1].offset, 3);
        assert_eq!(lexemes[2].offset, 6);
    }

    #[test]
    fn test_lone_ampersand() {
        assert_eq!(tokenize("a & b"), Err(LexError::UnexpectedChar { ch: '&', offset: 2 }));
    }

    #[test]
    fn test_lone_pipe_at_end() {
        assert_eq!(tokenize("a |"), Err(LexError::UnexpectedChar { ch: '|', offset: 2 }));
    }

    #[test]
    fn test_triple_ampersand() {
        assert_eq!(tokenize("a &&& b"), Err(LexError::UnexpectedChar { ch: '&', offset: 4 }));
    }

    #[test]
    fn test_mixed_operator_chars() {
        assert_eq!(tokenize("a &| b"), Err(LexError::UnexpectedChar { ch: '&', offset: 2 }));
    }
}
