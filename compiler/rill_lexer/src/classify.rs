//! Byte classification predicates for the scanner dispatch.
//!
//! Pure functions over a single byte, no state. Every predicate returns
//! `false` for the sentinel byte (`0x00`), so `eat_while` loops terminate
//! at end of input without explicit checks.

/// 256-byte lookup table for letter bytes: a-z, A-Z, and underscore.
/// Table lookup replaces the multi-range `matches!` with a single indexed read.
static IS_LETTER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'_');
        i += 1;
    }
    table
};

/// Returns `true` for an ASCII letter or underscore. Starts a word scan.
#[inline]
pub(crate) fn is_letter(b: u8) -> bool {
    IS_LETTER_TABLE[b as usize]
}

/// Returns `true` for an ASCII digit. Starts a number scan.
#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns `true` for the double-quote byte. Starts a string scan.
#[inline]
pub(crate) fn is_string_start(b: u8) -> bool {
    b == b'"'
}

/// Identifier-continue class: letters, digits, underscore.
#[inline]
pub(crate) fn is_letter_or_digit(b: u8) -> bool {
    is_letter(b) || is_digit(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_underscore_are_letters() {
        assert!(is_letter(b'a'));
        assert!(is_letter(b'Z'));
        assert!(is_letter(b'_'));
        assert!(!is_letter(b'0'));
        assert!(!is_letter(b'"'));
        assert!(!is_letter(b' '));
    }

    #[test]
    fn digits_only() {
        assert!(is_digit(b'0'));
        assert!(is_digit(b'9'));
        assert!(!is_digit(b'a'));
        assert!(!is_digit(b'.'));
    }

    #[test]
    fn string_start_is_double_quote() {
        assert!(is_string_start(b'"'));
        assert!(!is_string_start(b'\''));
    }

    #[test]
    fn sentinel_matches_no_class() {
        assert!(!is_letter(0));
        assert!(!is_digit(0));
        assert!(!is_string_start(0));
        assert!(!is_letter_or_digit(0));
    }
}
