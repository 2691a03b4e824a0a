//! Numeric symbol codes for the external grammar driver.
//!
//! Single-character punctuation is encoded as its ASCII byte value;
//! named terminals take codes from a private range starting at 57346.
//! Both halves of that convention come from the generated parse tables
//! and must not drift from them.

use rill_ir::TokenKind;

pub const PROGRAM: i32 = 57346;
pub const VAR: i32 = 57347;
pub const INT_TYPE: i32 = 57348;
pub const FLOAT_TYPE: i32 = 57349;
pub const IF: i32 = 57350;
pub const ELSE: i32 = 57351;
pub const PRINT: i32 = 57352;
pub const TRUE: i32 = 57353;
pub const FALSE: i32 = 57354;
pub const NOT_EQ: i32 = 57355;
pub const ID: i32 = 57356;
pub const CTE_I: i32 = 57357;
pub const CTE_F: i32 = 57358;
pub const CTE_STRING: i32 = 57359;

/// Map a token kind to its symbol code.
///
/// Total over every kind the lexer can emit except `Illegal` and `Eof`,
/// which have no terminal in the grammar; those return `None` and the
/// session substitutes an opaque code.
pub fn code_for(kind: TokenKind) -> Option<i32> {
    let code = match kind {
        TokenKind::Assign => i32::from(b'='),
        TokenKind::Lt => i32::from(b'<'),
        TokenKind::Gt => i32::from(b'>'),
        TokenKind::Semicolon => i32::from(b';'),
        TokenKind::Colon => i32::from(b':'),
        TokenKind::LParen => i32::from(b'('),
        TokenKind::RParen => i32::from(b')'),
        TokenKind::LBrace => i32::from(b'{'),
        TokenKind::RBrace => i32::from(b'}'),
        TokenKind::Plus => i32::from(b'+'),
        TokenKind::Minus => i32::from(b'-'),
        TokenKind::Slash => i32::from(b'/'),
        TokenKind::Comma => i32::from(b','),
        TokenKind::Star => i32::from(b'*'),
        TokenKind::Program => PROGRAM,
        TokenKind::Var => VAR,
        TokenKind::IntType => INT_TYPE,
        TokenKind::FloatType => FLOAT_TYPE,
        TokenKind::If => IF,
        TokenKind::Else => ELSE,
        TokenKind::Print => PRINT,
        TokenKind::True => TRUE,
        TokenKind::False => FALSE,
        TokenKind::NotEq => NOT_EQ,
        TokenKind::Ident => ID,
        TokenKind::Int => CTE_I,
        TokenKind::Float => CTE_F,
        TokenKind::Str => CTE_STRING,
        TokenKind::Illegal | TokenKind::Eof => return None,
    };
    Some(code)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::code_for;
    use pretty_assertions::assert_eq;
    use rill_ir::TokenKind;

    #[test]
    fn punctuation_maps_to_its_ascii_byte() {
        assert_eq!(code_for(TokenKind::Assign), Some(61));
        assert_eq!(code_for(TokenKind::Semicolon), Some(59));
        assert_eq!(code_for(TokenKind::LParen), Some(40));
        assert_eq!(code_for(TokenKind::Star), Some(42));
    }

    #[test]
    fn named_terminals_stay_in_the_private_range() {
        for kind in [
            TokenKind::Program,
            TokenKind::Var,
            TokenKind::IntType,
            TokenKind::FloatType,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::Print,
            TokenKind::True,
            TokenKind::False,
            TokenKind::NotEq,
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Str,
        ] {
            let code = code_for(kind).unwrap();
            assert!((57346..=57359).contains(&code), "{kind:?} -> {code}");
        }
    }

    #[test]
    fn illegal_and_eof_have_no_terminal() {
        assert_eq!(code_for(TokenKind::Illegal), None);
        assert_eq!(code_for(TokenKind::Eof), None);
    }
}
