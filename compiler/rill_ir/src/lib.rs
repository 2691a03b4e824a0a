//! Shared vocabulary for the Rill front-end.
//!
//! Holds the token types exchanged between the lexer, the diagnostic
//! layer, and the parser adapter. Nothing here scans or validates —
//! those concerns live in `rill_lexer`.

mod token;

pub use token::{Token, TokenKind};
