//! Keyword resolution for the word scanner.
//!
//! Case-sensitive, length-bucketed lookup: the identifier's length is a
//! first-pass filter, then the text matches against the keywords of that
//! length. The table also carries the two-character relational symbol
//! `<>`; the letter scan can never produce it, but the entry is kept as
//! defensive validation of the table's contract.

use rill_ir::TokenKind;

/// Look up a keyword by its exact text.
///
/// Returns `None` for anything that is not a keyword — the caller then
/// rescans the run as an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            "<>" => Some(TokenKind::NotEq),
            _ => None,
        },
        3 => match text {
            "var" => Some(TokenKind::Var),
            "int" => Some(TokenKind::IntType),
            _ => None,
        },
        4 => match text {
            "else" => Some(TokenKind::Else),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "float" => Some(TokenKind::FloatType),
            "print" => Some(TokenKind::Print),
            "false" => Some(TokenKind::False),
            _ => None,
        },
        7 => match text {
            "program" => Some(TokenKind::Program),
            _ => None,
        },
        _ => None,
    }
}
