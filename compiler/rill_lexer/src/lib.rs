//! Lexer for Rill.
//!
//! Converts raw source text into a stream of classified [`Token`]s via a
//! hand-written scanner over a sentinel-terminated [`SourceBuffer`].
//!
//! # Architecture
//!
//! ```text
//! source → SourceBuffer → Lexer::next_token → Token (+ TokenHistory)
//! ```
//!
//! Two lexical categories share a prefix-reading strategy but differ in
//! the accepted character set (keyword vs. identifier, float vs. integer).
//! The scanner tries the stricter category first; if the accumulated text
//! fails that category's shape check, the cursor is rewound to a
//! checkpoint taken before the attempt and the broader category is
//! scanned instead. Checkpoints are value copies of the cursor plus the
//! line counter, taken and consumed locally inside one scan.
//!
//! Lexical errors are data: a byte or run that matches no category comes
//! back as an ordinary [`TokenKind::Illegal`] token and scanning
//! continues. The caller decides fatality.
//!
//! [`Token`]: rill_ir::Token
//! [`TokenKind::Illegal`]: rill_ir::TokenKind::Illegal

mod classify;
mod keywords;
mod scanner;
mod shape;

pub use rill_lexer_core::SourceBuffer;
pub use scanner::{tokenize, CursorAfter, Lexer, Scanned};
