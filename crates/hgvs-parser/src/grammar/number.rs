use crate::cursor::Cursor;
use crate::error::ParseOutcome;
use crate::lex::{match_char, match_number};
use crate::tree::Node;

/// `decimal-digit+`.
pub fn number(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;
    match match_number(&mut c) {
        Some(value) => {
            *cursor = c;
            ParseOutcome::Matched(Node::Number(value))
        }
        None => ParseOutcome::Unmatched,
    }
}

/// `?`.
pub fn unknown(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;
    if match_char(&mut c, b'?') {
        *cursor = c;
        ParseOutcome::Matched(Node::Unknown)
    } else {
        ParseOutcome::Unmatched
    }
}

/// `unknown | number`.
pub fn number_or_unknown(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    match unknown(cursor) {
        ParseOutcome::Unmatched => number(cursor),
        other => other,
    }
}
