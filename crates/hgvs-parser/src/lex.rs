//! Lexical matchers: non-backtracking scanners over a [`Cursor`].
//!
//! Every matcher here either advances the cursor past what it consumed, or
//! leaves it untouched. Callers that need to try one speculatively clone the
//! cursor first (see [`Cursor`]'s doc comment) rather than relying on any
//! matcher here to roll back on its own.

use crate::classify::{is_alpha, is_alphanumeric, is_decimal_digit, is_iupac_dna};
use crate::cursor::Cursor;
use crate::tree::NumberValue;

/// The largest value `match_number` will report as in-range. Chosen, like the
/// original parser's bound, comfortably below `u64::MAX` so the running
/// accumulation can't itself overflow before the overflow check fires.
const MAX_SAFE_NUMBER: u64 = u64::MAX / 10 - 10;

/// Advance past exactly `ch` if it's next; otherwise leave the cursor alone.
pub fn match_char(cursor: &mut Cursor<'_>, ch: u8) -> bool {
    if cursor.peek_byte() == Some(ch) {
        cursor.bump();
        true
    } else {
        false
    }
}

/// Advance past `literal` if it's next, atomically: either all of it matches
/// or nothing is consumed.
pub fn match_str(cursor: &mut Cursor<'_>, literal: &str) -> bool {
    let mut probe = *cursor;
    for &byte in literal.as_bytes() {
        if probe.bump() != Some(byte) {
            return false;
        }
    }
    *cursor = probe;
    true
}

/// Consume the maximal run of decimal digits and decode it.
///
/// Returns `None` if zero digits were present (unmatched). On overflow of
/// [`MAX_SAFE_NUMBER`], the cursor still advances past every digit and the
/// result is [`NumberValue::OutOfRange`] rather than a parse error — an
/// out-of-range integer is syntactically well-formed; only a later semantic
/// pass would reject it.
pub fn match_number(cursor: &mut Cursor<'_>) -> Option<NumberValue> {
    let start = *cursor;
    let mut value: u64 = 0;
    let mut out_of_range = false;
    let mut saw_digit = false;

    while let Some(b) = cursor.peek_byte() {
        if !is_decimal_digit(b) {
            break;
        }
        saw_digit = true;
        cursor.bump();
        if value > MAX_SAFE_NUMBER {
            out_of_range = true;
        } else {
            value = value * 10 + u64::from(b - b'0');
        }
    }

    if !saw_digit {
        return None;
    }

    if out_of_range {
        Some(NumberValue::OutOfRange(cursor.span_from(start)))
    } else {
        Some(NumberValue::Value(value))
    }
}

/// Consume the maximal run of IUPAC-DNA codes. `None` if none were present.
pub fn match_sequence(cursor: &mut Cursor<'_>) -> Option<crate::Span> {
    let start = *cursor;
    while let Some(b) = cursor.peek_byte() {
        if !is_iupac_dna(b) {
            break;
        }
        cursor.bump();
    }
    if cursor.pos() == start.pos() {
        None
    } else {
        Some(cursor.span_from(start))
    }
}

/// `letter (alphanumeric | '.' | '_')*`. `None` if the first byte isn't a
/// letter.
pub fn match_identifier(cursor: &mut Cursor<'_>) -> Option<crate::Span> {
    let start = *cursor;
    match cursor.peek_byte() {
        Some(b) if is_alpha(b) => {
            cursor.bump();
        }
        _ => return None,
    }
    while let Some(b) = cursor.peek_byte() {
        if is_alphanumeric(b) || b == b'.' || b == b'_' {
            cursor.bump();
        } else {
            break;
        }
    }
    Some(cursor.span_from(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_char_advances_only_on_equality() {
        let mut c = Cursor::new("del");
        assert!(match_char(&mut c, b'd'));
        assert_eq!(c.pos(), 1);
        assert!(!match_char(&mut c, b'x'));
        assert_eq!(c.pos(), 1);
    }

    #[test]
    fn match_str_is_atomic() {
        let mut c = Cursor::new("delins");
        assert!(match_str(&mut c, "del"));
        assert_eq!(c.pos(), 3);

        let mut c = Cursor::new("dex");
        assert!(!match_str(&mut c, "del"));
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn match_number_decodes_digits() {
        let mut c = Cursor::new("4375C");
        match match_number(&mut c) {
            Some(NumberValue::Value(4375)) => {}
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(c.pos(), 4);
    }

    #[test]
    fn match_number_flags_overflow_but_still_advances() {
        let digits = "9".repeat(40);
        let mut c = Cursor::new(&digits);
        match match_number(&mut c) {
            Some(NumberValue::OutOfRange(span)) => assert_eq!(span.len(), 40),
            other => panic!("unexpected {other:?}"),
        }
        assert!(c.is_at_end());
    }

    #[test]
    fn match_number_unmatched_on_no_digits() {
        let mut c = Cursor::new("del");
        assert!(match_number(&mut c).is_none());
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn match_sequence_consumes_maximal_iupac_run() {
        let mut c = Cursor::new("ACGTN>T");
        let span = match_sequence(&mut c).unwrap();
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn match_identifier_requires_leading_letter() {
        let mut c = Cursor::new("4375C");
        assert!(match_identifier(&mut c).is_none());

        let mut c = Cursor::new("NM_004006.2:c.1A>T");
        let span = match_identifier(&mut c).unwrap();
        assert_eq!(&c.input()[span.start..span.end], "NM_004006.2");
    }
}
