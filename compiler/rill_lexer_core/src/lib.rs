//! Low-level scanning primitives for the Rill lexer.
//!
//! [`SourceBuffer`] owns the immutable source text as a sentinel-terminated
//! byte buffer; [`Cursor`] is a cheap `Copy` value that walks it one byte at
//! a time. The cursor being `Copy` is what makes backtracking lookahead a
//! value snapshot: capture the cursor before a speculative scan, assign it
//! back if the attempt fails.
//!
//! This crate is standalone by design — no `rill_*` dependencies.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
