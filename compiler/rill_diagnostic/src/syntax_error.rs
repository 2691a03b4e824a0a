//! The single terminal error a parse can end with.

use thiserror::Error;

/// A syntax error reported by the external grammar driver, composed with
/// the diagnostic context captured at the moment it was filed.
///
/// Exactly one of these can be pending per parse session; the session
/// applies a last-write-wins policy if the driver reports again before
/// the stored error is read.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}\n near {context}")]
pub struct SyntaxError {
    /// The grammar driver's message (what could not be shifted/reduced).
    pub message: String,
    /// Rendered trailing-window context from the token history.
    pub context: String,
    /// Line number of the oldest token in the trailing window.
    pub line: u32,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, context: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            context: context.into(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SyntaxError;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_message_and_context() {
        let err = SyntaxError::new("syntax error", "1 x = 10 + <-- \n in line: 2", 2);
        let rendered = err.to_string();
        assert!(rendered.starts_with("syntax error\n near "));
        assert!(rendered.contains("in line: 2"));
        assert_eq!(err.line, 2);
    }
}
