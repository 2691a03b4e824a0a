//! The scanning driver: dispatch, lexeme scanners, and the advancement
//! contract.
//!
//! `next_token` skips whitespace, dispatches on the current byte, and
//! resolves each scanner's [`Scanned`] result: tokens built from the
//! character under the cursor ([`CursorAfter::OnLexeme`]) get exactly one
//! advance from the driver, tokens built by a multi-character scan
//! ([`CursorAfter::PastLexeme`]) get none, because the scan already left
//! the cursor past the match. Making that contract part of the result
//! type is what rules out the double-advance defect.

use crate::{classify, keywords, shape};
use rill_diagnostic::TokenHistory;
use rill_lexer_core::{Cursor, SourceBuffer};
use rill_ir::{Token, TokenKind};

/// Where the cursor stands relative to the lexeme just emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorAfter {
    /// The cursor is still on the lexeme's last byte; the driver must
    /// advance exactly once after emission.
    OnLexeme,
    /// The scan already left the cursor past the lexeme; the driver must
    /// not advance.
    PastLexeme,
}

/// A scanner result: the token plus its advancement contract.
#[derive(Clone, Copy, Debug)]
pub struct Scanned<'src> {
    pub token: Token<'src>,
    pub after: CursorAfter,
}

/// Scan state captured before a speculative attempt.
///
/// A deep value copy (the cursor is `Copy`), never a reference into live
/// state. Constructed only locally around one scan attempt and restored
/// at most once, onto the same input buffer, at or before the position
/// it was taken.
#[derive(Clone, Copy)]
struct Checkpoint<'src> {
    cursor: Cursor<'src>,
    line: u32,
}

/// The Rill lexer.
///
/// Produces one token per `next_token` call, appending every emitted
/// token — including `Illegal` and `Eof` — to its [`TokenHistory`]
/// before returning it.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// 1-based; incremented exactly once per newline consumed.
    line: u32,
    history: TokenHistory<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(buffer: &'src SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            line: 1,
            history: TokenHistory::new(),
        }
    }

    /// The current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Every token emitted so far, in emission order.
    pub fn history(&self) -> &TokenHistory<'src> {
        &self.history
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` with an empty literal once the source is exhausted;
    /// subsequent calls keep returning `Eof`.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_whitespace();

        let scanned = match self.cursor.current() {
            b'=' => self.single(TokenKind::Assign),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b';' => self.single(TokenKind::Semicolon),
            b':' => self.single(TokenKind::Colon),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'/' => self.single(TokenKind::Slash),
            b',' => self.single(TokenKind::Comma),
            b'*' => self.single(TokenKind::Star),
            0 if self.cursor.is_eof() => self.eof(),
            b if classify::is_letter(b) => self.scan_word(),
            b if classify::is_digit(b) => self.scan_number(),
            b if classify::is_string_start(b) => self.scan_string(),
            _ => self.single(TokenKind::Illegal),
        };

        if scanned.after == CursorAfter::OnLexeme {
            self.cursor.advance();
        }
        self.history.record(scanned.token);
        scanned.token
    }

    /// Skip spaces, tabs, carriage returns, and newlines, incrementing the
    /// line counter exactly once per newline consumed.
    ///
    /// Every path that consumes characters outside this helper must
    /// replicate the newline rule or line numbers drift — the string
    /// scanner is the one other consumer of newlines.
    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b' ' | b'\t' | b'\r' => self.cursor.advance(),
                _ => break,
            }
        }
    }

    // ─── Backtracking lookahead ──────────────────────────────────────────

    fn checkpoint(&self) -> Checkpoint<'src> {
        Checkpoint {
            cursor: self.cursor,
            line: self.line,
        }
    }

    fn restore(&mut self, saved: Checkpoint<'src>) {
        debug_assert!(
            saved.cursor.pos() <= self.cursor.pos(),
            "checkpoint taken after current position"
        );
        self.cursor = saved.cursor;
        self.line = saved.line;
    }

    // ─── Token builders ──────────────────────────────────────────────────

    /// Token from the single character under the cursor. The driver
    /// advances once after emission.
    fn single(&self, kind: TokenKind) -> Scanned<'src> {
        let start = self.cursor.pos();
        // A failed word/number rescan can land the fallback Illegal on the
        // sentinel; clamp so the literal stays within the source.
        let end = (start + 1).min(self.cursor.source_len());
        Scanned {
            token: Token::new(kind, self.cursor.slice(start, end), self.line, start),
            after: CursorAfter::OnLexeme,
        }
    }

    /// Token for an accumulated run; the scan already consumed the lexeme,
    /// so the cursor is past it and the driver must not advance.
    fn lexeme(&self, kind: TokenKind, start: u32, line: u32) -> Scanned<'src> {
        Scanned {
            token: Token::new(kind, self.cursor.slice_from(start), line, start),
            after: CursorAfter::PastLexeme,
        }
    }

    fn eof(&self) -> Scanned<'src> {
        // The cursor stays parked on the sentinel.
        Scanned {
            token: Token::new(TokenKind::Eof, "", self.line, self.cursor.source_len()),
            after: CursorAfter::PastLexeme,
        }
    }

    // ─── Lexeme scanners ─────────────────────────────────────────────────

    /// Word scan: keyword first, identifier on rewind.
    ///
    /// The letter run is the stricter category; if the run is not in the
    /// keyword table, the cursor rewinds and the broader letters-or-digits
    /// run is scanned and validated as an identifier.
    fn scan_word(&mut self) -> Scanned<'src> {
        let saved = self.checkpoint();
        let start = self.cursor.pos();
        self.cursor.eat_while(classify::is_letter);
        if let Some(kind) = keywords::lookup(self.cursor.slice_from(start)) {
            return self.lexeme(kind, start, saved.line);
        }

        self.restore(saved);
        let start = self.cursor.pos();
        self.cursor.eat_while(classify::is_letter_or_digit);
        if shape::is_identifier(self.cursor.slice_from(start)) {
            return self.lexeme(TokenKind::Ident, start, saved.line);
        }

        self.single(TokenKind::Illegal)
    }

    /// Number scan: float first, integer on rewind.
    ///
    /// The float attempt is greedy across the decimal point, so `10.5` is
    /// never split into `10` and `.5`. The float shape demands a mandatory
    /// fractional part; a plain digit run fails it and falls back to the
    /// integer scan.
    fn scan_number(&mut self) -> Scanned<'src> {
        let saved = self.checkpoint();
        let start = self.cursor.pos();
        self.cursor
            .eat_while(|b| classify::is_digit(b) || b == b'.');
        if shape::is_float(self.cursor.slice_from(start)) {
            return self.lexeme(TokenKind::Float, start, saved.line);
        }

        self.restore(saved);
        let start = self.cursor.pos();
        self.cursor.eat_while(classify::is_digit);
        if shape::is_integer(self.cursor.slice_from(start)) {
            return self.lexeme(TokenKind::Int, start, saved.line);
        }

        self.single(TokenKind::Illegal)
    }

    /// String scan: both quotes are part of the literal.
    ///
    /// Newlines inside the string advance the line counter, keeping the
    /// whitespace-helper invariant. Reaching end of input before the
    /// closing quote is the unterminated-string condition: one `Illegal`
    /// token with an empty literal, positioned at the opening quote, and
    /// the cursor left at end of input — no partial content is salvaged.
    fn scan_string(&mut self) -> Scanned<'src> {
        let line = self.line;
        let start = self.cursor.pos();
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.lexeme(TokenKind::Str, start, line);
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => {
                    return Scanned {
                        token: Token::new(TokenKind::Illegal, "", line, start),
                        after: CursorAfter::PastLexeme,
                    };
                }
            }
        }
    }
}

/// Tokenize a whole buffer, collecting every token up to and including
/// the final `Eof`.
pub fn tokenize(buffer: &SourceBuffer) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(buffer);
    let mut tokens = Vec::new();
    loop {
        let tok = lexer.next_token();
        tokens.push(tok);
        if tok.kind == TokenKind::Eof {
            break;
        }
    }
    tokens
}
