use super::err_here;
use super::insert::inserted;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::match_str;
use crate::tree::Node;

fn optional_inserted(c: &mut Cursor<'_>) -> Result<Option<Box<Node>>, ParseError> {
    match inserted(c) {
        ParseOutcome::Matched(n) => Ok(Some(n.boxed())),
        ParseOutcome::Unmatched => Ok(None),
        ParseOutcome::Errored(e) => Err(e),
    }
}

/// `'del' (sequence_or_length | compound inserted) ('ins' inserted)?`.
///
/// The bracketed-list alternative for the deleted material (Open Question
/// (b)) is expressed by letting the deleted payload be any `inserted`, whose
/// own grammar already covers a bracketed compound as well as a bare
/// sequence/location/length.
pub fn deletion_or_deletion_insertion(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_str(&mut c, "del") {
        return ParseOutcome::Unmatched;
    }

    let deleted = match optional_inserted(&mut c) {
        Ok(d) => d,
        Err(e) => return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching deletion", e)),
    };

    if match_str(&mut c, "ins") {
        let inserted_node = match inserted(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return err_here(&c, "expected an insert after 'ins'"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(
                    entry.here(),
                    "while matching deletion-insertion",
                    e,
                ))
            }
        };
        *cursor = c;
        return ParseOutcome::Matched(Node::DeletionInsertion {
            deleted,
            inserted: inserted_node.boxed(),
        });
    }

    *cursor = c;
    ParseOutcome::Matched(Node::Deletion(deleted))
}

/// `'ins' inserted`.
pub fn insertion(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_str(&mut c, "ins") {
        return ParseOutcome::Unmatched;
    }

    let body = match inserted(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected an insert after 'ins'"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching insertion", e))
        }
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Insertion(body.boxed()))
}

/// `'dup' inserted?`.
pub fn duplication(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_str(&mut c, "dup") {
        return ParseOutcome::Unmatched;
    }

    let body = match optional_inserted(&mut c) {
        Ok(d) => d,
        Err(e) => return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching duplication", e)),
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Duplication(body))
}

/// `'inv' inserted?`.
pub fn inversion(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_str(&mut c, "inv") {
        return ParseOutcome::Unmatched;
    }

    let body = match optional_inserted(&mut c) {
        Ok(d) => d,
        Err(e) => return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching inversion", e)),
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Inversion(body))
}

/// `'con' inserted`.
pub fn conversion(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !match_str(&mut c, "con") {
        return ParseOutcome::Unmatched;
    }

    let body = match inserted(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected an insert after 'con'"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching conversion", e))
        }
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Conversion(body.boxed()))
}

/// `'=' inserted?`.
pub fn equal(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;
    if !crate::lex::match_char(&mut c, b'=') {
        return ParseOutcome::Unmatched;
    }

    let body = match optional_inserted(&mut c) {
        Ok(d) => d,
        Err(e) => return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching '='", e)),
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Equal(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_without_payload() {
        let mut c = Cursor::new("del");
        match deletion_or_deletion_insertion(&mut c) {
            ParseOutcome::Matched(Node::Deletion(None)) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn deletion_with_sequence_payload() {
        let mut c = Cursor::new("delC");
        match deletion_or_deletion_insertion(&mut c) {
            ParseOutcome::Matched(Node::Deletion(Some(_))) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn deletion_insertion_combo() {
        let mut c = Cursor::new("delinsGG");
        match deletion_or_deletion_insertion(&mut c) {
            ParseOutcome::Matched(Node::DeletionInsertion { deleted: None, .. }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn insertion_requires_payload() {
        let mut c = Cursor::new("ins");
        assert!(insertion(&mut c).is_errored());

        let mut c = Cursor::new("insTT");
        assert!(insertion(&mut c).is_matched());
    }

    #[test]
    fn duplication_payload_is_optional() {
        let mut c = Cursor::new("dup");
        assert_eq!(duplication(&mut c), ParseOutcome::Matched(Node::Duplication(None)));
    }

    #[test]
    fn conversion_requires_payload() {
        let mut c = Cursor::new("con");
        assert!(conversion(&mut c).is_errored());
    }

    #[test]
    fn equal_with_no_payload() {
        let mut c = Cursor::new("=");
        assert_eq!(equal(&mut c), ParseOutcome::Matched(Node::Equal(None)));
    }
}
