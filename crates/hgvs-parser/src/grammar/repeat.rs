use super::err_here;
use super::number::number_or_unknown;
use super::position::location;
use super::sequence::sequence;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::match_char;
use crate::tree::Node;

/// `[` (`number_or_unknown` | exact-range) `]`.
///
/// The bracketed count on its own reuses [`Node::Range`] for the two-number
/// form rather than a dedicated variant: `repeat`'s printer rule already
/// wraps whatever this returns in `[` `]`, and `Range`'s own emission rule
/// (`start '_' end`) is exactly the text an exact range needs here.
pub fn repeated(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_char(&mut c, b'[') {
        return ParseOutcome::Unmatched;
    }

    let first = match number_or_unknown(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a number or '?' after '['"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching repeat count", e))
        }
    };

    let count = if match_char(&mut c, b'_') {
        let second = match number_or_unknown(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return err_here(&c, "expected a second number or '?' after '_'"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(
                    entry.here(),
                    "while matching repeat count",
                    e,
                ))
            }
        };
        Node::Range {
            start: first.boxed(),
            end: second.boxed(),
        }
    } else {
        first
    };

    if !match_char(&mut c, b']') {
        return err_here(&c, "expected ']' to close a repeat count");
    }

    *cursor = c;
    ParseOutcome::Matched(count)
}

/// (`sequence` | `location`) `repeated`.
pub fn repeat(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let unit = match sequence(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => match location(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
            ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
        },
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    let count = match repeated(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a bracketed repeat count"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching repeat", e))
        }
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Repeat {
        unit: unit.boxed(),
        count: count.boxed(),
    })
}

/// `repeat+`, collected in written order.
pub fn compound_repeat(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;
    let mut repeats = Vec::new();

    loop {
        match repeat(&mut c) {
            ParseOutcome::Matched(n) => repeats.push(n),
            ParseOutcome::Unmatched => break,
            ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
        }
    }

    if repeats.is_empty() {
        return ParseOutcome::Unmatched;
    }

    *cursor = c;
    ParseOutcome::Matched(Node::CompoundRepeat(repeats))
}
