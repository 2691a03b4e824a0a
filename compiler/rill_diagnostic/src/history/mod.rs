//! Append-only token history with a bounded diagnostic window.

use rill_ir::Token;
use std::fmt::Write;

/// Number of trailing tokens rendered in an error context.
pub const CONTEXT_WINDOW: usize = 5;

/// Append-only ordered sequence of every token emitted so far.
///
/// Owned exclusively by the lexer for the duration of one tokenization
/// pass; read-only everywhere else. Tokens are appended in emission order
/// and never reordered or mutated after insertion.
#[derive(Debug, Default)]
pub struct TokenHistory<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenHistory<'src> {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token. There is deliberately no way to remove or reorder.
    pub fn record(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    /// All recorded tokens, in emission order.
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// The most recently recorded token, if any.
    pub fn last(&self) -> Option<&Token<'src>> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The trailing window of up to [`CONTEXT_WINDOW`] tokens, oldest first.
    fn window(&self) -> &[Token<'src>] {
        let start = self.tokens.len().saturating_sub(CONTEXT_WINDOW);
        &self.tokens[start..]
    }

    /// Line number of the oldest token in the trailing window.
    ///
    /// Returns 0 when no tokens have been recorded.
    pub fn context_line(&self) -> u32 {
        self.window().first().map_or(0, |tok| tok.line)
    }

    /// Render the trailing diagnostic window.
    ///
    /// Format: the most recently read token's literal, then the literals
    /// of the trailing window (oldest first), then the line number of the
    /// oldest token in that window. A pure function of the history —
    /// calling it twice without new tokens yields an identical string.
    pub fn format_context(&self) -> String {
        let Some(last) = self.tokens.last() else {
            return String::from("<no tokens read>");
        };

        let mut out = String::new();
        out.push_str(last.literal);
        out.push(' ');
        for tok in self.window() {
            out.push_str(tok.literal);
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "<-- \n in line: {}", self.context_line());
        out
    }
}
