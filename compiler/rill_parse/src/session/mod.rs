//! One parse, one session.
//!
//! A [`ParseSession`] is created per source buffer, handed to the
//! grammar driver for the duration of a single parse, and discarded
//! afterwards. It owns the lexer and the single pending-error slot; it
//! is never reused across parses.

use crate::symbol;
use rill_diagnostic::{SyntaxError, TokenHistory};
use rill_lexer::{Lexer, SourceBuffer};
use tracing::{debug, trace};

/// The caller-owned semantic-value slot the grammar driver passes back
/// on every symbol request. Holds the literal of the token behind the
/// most recently returned code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SemanticValue {
    pub text: String,
}

/// The lexer-side interface the external grammar driver drives.
pub trait TokenSupply {
    /// Pull the next token, write its literal into `value`, and return
    /// its symbol code.
    fn next_symbol(&mut self, value: &mut SemanticValue) -> i32;

    /// File a syntax error. Called by the driver when a symbol cannot be
    /// shifted or reduced; after this the driver is expected to stop.
    fn report_error(&mut self, message: &str);
}

/// State for a single parse: the lexer plus the pending-error slot.
pub struct ParseSession<'src> {
    lexer: Lexer<'src>,
    pending: Option<SyntaxError>,
}

impl<'src> ParseSession<'src> {
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Self {
            lexer: Lexer::new(buffer),
            pending: None,
        }
    }

    /// The pending syntax error, if the driver has reported one.
    pub fn error(&self) -> Option<&SyntaxError> {
        self.pending.as_ref()
    }

    /// Move the pending error out, leaving the slot empty.
    pub fn take_error(&mut self) -> Option<SyntaxError> {
        self.pending.take()
    }

    /// The token history accumulated so far.
    pub fn history(&self) -> &TokenHistory<'src> {
        self.lexer.history()
    }
}

impl TokenSupply for ParseSession<'_> {
    /// Pure mapping from token kind to symbol code; no lexical decision
    /// is made here. Kinds with no terminal in the grammar (`Illegal`,
    /// `Eof`) return the token's line number as an opaque code, which
    /// the parse tables reject.
    fn next_symbol(&mut self, value: &mut SemanticValue) -> i32 {
        let token = self.lexer.next_token();
        value.text.clear();
        value.text.push_str(token.literal);

        let code = match symbol::code_for(token.kind) {
            Some(code) => code,
            None => i32::try_from(token.line).unwrap_or(i32::MAX),
        };
        trace!(kind = %token.kind, code, line = token.line, "supply symbol");
        code
    }

    /// Compose the driver's message with the current diagnostic context
    /// and store it. Last write wins: a second report before the first is
    /// read replaces it.
    fn report_error(&mut self, message: &str) {
        let history = self.lexer.history();
        let context = history.format_context();
        let line = history.context_line();
        debug!(line, error = message, "syntax error reported");
        self.pending = Some(SyntaxError::new(message, context, line));
    }
}

#[cfg(test)]
mod tests;
