//! Diagnostics for the Rill front-end.
//!
//! Two pieces:
//! - [`TokenHistory`] — an append-only record of every token the lexer
//!   has emitted, with a bounded trailing-window formatter used to build
//!   human-readable syntax-error context.
//! - [`SyntaxError`] — the single terminal error a parse can end with,
//!   composed from the grammar driver's message plus the token window.
//!
//! The history performs no validation of its own; it only remembers.

mod history;
mod syntax_error;

pub use history::{TokenHistory, CONTEXT_WINDOW};
pub use syntax_error::SyntaxError;
