//! Token types for the Rill lexer.
//!
//! A [`Token`] is an immutable record of one matched lexeme: its kind,
//! the exact source text, and where the match started. The literal is a
//! slice of the source buffer, never a rebuilt copy — the lexer tracks
//! byte offsets and slices the already-read span.

use std::fmt;

/// A token with its exact source text and position.
///
/// Tokens are produced in strictly increasing scan-position order and
/// never mutated after creation. `line` is 1-based and advances once per
/// newline consumed before the token; `column` is the byte offset of the
/// token's start in the source.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Exact matched text, sliced from the source buffer.
    pub literal: &'src str,
    pub line: u32,
    pub column: u32,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(kind: TokenKind, literal: &'src str, line: u32, column: u32) -> Self {
        Token {
            kind,
            literal,
            line,
            column,
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}",
            self.kind, self.literal, self.line, self.column
        )
    }
}

/// Token kinds for Rill.
///
/// Closed enumeration: fixed punctuation, the keyword set, the literal
/// classes, and the two out-of-band kinds `Eof` and `Illegal`. Lexical
/// errors are carried as ordinary `Illegal` tokens, not as `Err` values —
/// the grammar layer decides whether they are fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation and operators
    Assign,    // =
    Lt,        // <
    Gt,        // >
    NotEq,     // <>
    Semicolon, // ;
    Colon,     // :
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Plus,      // +
    Minus,     // -
    Slash,     // /
    Comma,     // ,
    Star,      // *

    // Keywords
    Program,
    Var,
    IntType,   // int
    FloatType, // float
    If,
    Else,
    Print,
    True,
    False,

    // Literals and identifiers
    Ident,
    Int,
    Float,
    Str,

    /// End of input. Literal is always empty.
    Eof,
    /// A character or run that matches no lexical category.
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Assign => "=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::NotEq => "<>",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Slash => "/",
            TokenKind::Comma => ",",
            TokenKind::Star => "*",
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::IntType => "int",
            TokenKind::FloatType => "float",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Print => "print",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Str => "string literal",
            TokenKind::Eof => "end of input",
            TokenKind::Illegal => "illegal token",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_carries_exact_literal() {
        let tok = Token::new(TokenKind::Float, "10.55", 1, 8);
        assert_eq!(tok.kind, TokenKind::Float);
        assert_eq!(tok.literal, "10.55");
        assert_eq!(tok.line, 1);
        assert_eq!(tok.column, 8);
    }

    #[test]
    fn debug_shows_kind_literal_and_position() {
        let tok = Token::new(TokenKind::Ident, "x", 3, 12);
        assert_eq!(format!("{tok:?}"), "Ident \"x\" @ 3:12");
    }

    #[test]
    fn display_renders_punctuation_as_glyph() {
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::NotEq.to_string(), "<>");
        assert_eq!(TokenKind::LBrace.to_string(), "{");
    }

    #[test]
    fn display_renders_keywords_as_their_literal() {
        assert_eq!(TokenKind::Program.to_string(), "program");
        assert_eq!(TokenKind::FloatType.to_string(), "float");
        assert_eq!(TokenKind::Print.to_string(), "print");
    }

    #[test]
    fn tokens_compare_by_value() {
        let a = Token::new(TokenKind::Int, "10", 1, 0);
        let b = Token::new(TokenKind::Int, "10", 1, 0);
        assert_eq!(a, b);
        assert_ne!(a, Token::new(TokenKind::Int, "10", 2, 0));
    }
}
