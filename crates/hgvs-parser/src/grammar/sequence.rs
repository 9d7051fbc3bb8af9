use crate::cursor::Cursor;
use crate::error::ParseOutcome;
use crate::lex::match_sequence;
use crate::tree::Node;

/// `IUPAC-DNA+`.
pub fn sequence(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let mut c = *cursor;
    match match_sequence(&mut c) {
        Some(span) => {
            *cursor = c;
            ParseOutcome::Matched(Node::Sequence(span))
        }
        None => ParseOutcome::Unmatched,
    }
}
