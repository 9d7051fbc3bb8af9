use super::err_here;
use super::number::number_or_unknown;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::match_char;
use crate::tree::{Anchor, LengthValue, Node, Sign};

/// (`+` | `-`) `number_or_unknown`.
pub fn offset(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;
    let sign = if match_char(&mut c, b'+') {
        Sign::Positive
    } else if match_char(&mut c, b'-') {
        Sign::Negative
    } else {
        return ParseOutcome::Unmatched;
    };

    let magnitude = match number_or_unknown(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a number or '?' after offset sign"),
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Offset {
        sign,
        magnitude: magnitude.boxed(),
    })
}

/// (`-` | `*`)? `number_or_unknown` `offset`?.
pub fn point(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;

    let anchor = if match_char(&mut c, b'-') {
        Anchor::Upstream
    } else if match_char(&mut c, b'*') {
        Anchor::Downstream
    } else {
        Anchor::None
    };

    let magnitude = match number_or_unknown(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => {
            if matches!(anchor, Anchor::None) {
                return ParseOutcome::Unmatched;
            }
            return err_here(&c, "expected a number or '?' after '-'/'*'");
        }
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    let offset_node = match offset(&mut c) {
        ParseOutcome::Matched(n) => Some(n.boxed()),
        ParseOutcome::Unmatched => None,
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Point {
        anchor,
        magnitude: magnitude.boxed(),
        offset: offset_node,
    })
}

/// `(` `point` `_` `point` `)`.
pub fn uncertain_point(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_char(&mut c, b'(') {
        return ParseOutcome::Unmatched;
    }

    let low = match point(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a point after '('"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(
                entry.here(),
                "while matching uncertain point",
                e,
            ))
        }
    };

    if !match_char(&mut c, b'_') {
        return err_here(&c, "expected '_' between the two points of an uncertain point");
    }

    let high = match point(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a second point after '_'"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(
                entry.here(),
                "while matching uncertain point",
                e,
            ))
        }
    };

    if !match_char(&mut c, b')') {
        return err_here(&c, "expected ')' to close an uncertain point");
    }

    *cursor = c;
    ParseOutcome::Matched(Node::UncertainPoint {
        low: low.boxed(),
        high: high.boxed(),
    })
}

/// `uncertain_point | point`.
fn point_or_uncertain(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    match uncertain_point(cursor) {
        ParseOutcome::Unmatched => point(cursor),
        other => other,
    }
}

/// (`uncertain_point` | `point`) (`_` (`uncertain_point` | `point`))?.
pub fn location(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let start = match point_or_uncertain(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    if !match_char(&mut c, b'_') {
        *cursor = c;
        return ParseOutcome::Matched(start);
    }

    let end = match point_or_uncertain(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected an endpoint after '_'"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching location", e))
        }
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Range {
        start: start.boxed(),
        end: end.boxed(),
    })
}

/// `(` (`number_or_unknown` | `number_or_unknown` `_` `number_or_unknown`) `)`.
pub fn length(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_char(&mut c, b'(') {
        return ParseOutcome::Unmatched;
    }

    let first = match number_or_unknown(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a number or '?' after '('"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching length", e))
        }
    };

    let value = if match_char(&mut c, b'_') {
        let second = match number_or_unknown(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return err_here(&c, "expected a second number or '?' after '_'"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching length", e))
            }
        };
        LengthValue::Range(first.boxed(), second.boxed())
    } else {
        LengthValue::Single(first.boxed())
    };

    if !match_char(&mut c, b')') {
        return err_here(&c, "expected ')' to close a length");
    }

    *cursor = c;
    ParseOutcome::Matched(Node::Length(value))
}
