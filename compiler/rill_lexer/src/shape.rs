//! Lexeme shape validation.
//!
//! Byte-wise re-checks applied after a scan attempt accumulates a run.
//! The scanners' character sets are narrow enough that some of these can
//! never fail from the dispatch path (a word scan always starts on a
//! letter, a number scan on a digit); the checks are kept as defensive
//! validation of the category contract, and they are what decides the
//! float-vs-integer backtrack.
//!
//! Signs are accepted by the numeric shapes even though the scanners
//! never consume one — the shape describes the category, not the scan.

/// Identifier shape: a leading ASCII letter, then letters, digits, or
/// underscores.
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    first.is_ascii_alphabetic() && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Integer shape: optional sign, then one or more digits.
pub(crate) fn is_integer(text: &str) -> bool {
    let digits = strip_sign(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Float shape: optional sign, optional integer digits, exactly one
/// decimal point, then a mandatory fractional digit run.
pub(crate) fn is_float(text: &str) -> bool {
    let unsigned = strip_sign(text);
    let Some((int_part, fraction)) = unsigned.split_once('.') else {
        return false;
    };
    int_part.bytes().all(|b| b.is_ascii_digit())
        && !fraction.is_empty()
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}
