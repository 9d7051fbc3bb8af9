use super::err_here;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::match_char;
use crate::lex::match_identifier;
use crate::tree::Node;

/// `letter (alphanumeric | '.' | '_')*`.
pub fn identifier(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;
    match match_identifier(&mut c) {
        Some(span) => {
            *cursor = c;
            ParseOutcome::Matched(Node::Identifier(span))
        }
        None => ParseOutcome::Unmatched,
    }
}

/// `identifier ( '(' reference ')' )?`.
pub fn reference(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let name = match match_identifier(&mut c) {
        Some(span) => span,
        None => return ParseOutcome::Unmatched,
    };

    let nested = if match_char(&mut c, b'(') {
        let inner = match reference(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return err_here(&c, "expected a nested reference after '('"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching reference", e))
            }
        };
        if !match_char(&mut c, b')') {
            return err_here(&c, "expected ')' to close a nested reference");
        }
        Some(inner.boxed())
    } else {
        None
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Reference { name, nested })
}
