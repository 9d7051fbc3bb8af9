use super::description::description;
use super::err_here;
use super::position::{length, location};
use super::repeat::{compound_repeat, repeated};
use super::sequence::sequence;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::{match_char, match_str};
use crate::tree::Node;

/// `sequence '>' sequence`.
pub fn substitution(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let from = match sequence(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    if !match_str(&mut c, ">") {
        return ParseOutcome::Unmatched;
    }

    let to = match sequence(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected a sequence after '>'"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching substitution", e))
        }
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Substitution {
        from: from.boxed(),
        to: to.boxed(),
    })
}

/// `sequence (` `>` `sequence | repeated compound_repeat?)`.
pub fn substitution_or_repeat(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let from = match sequence(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    if match_str(&mut c, ">") {
        let to = match sequence(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return err_here(&c, "expected a sequence after '>'"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching substitution", e))
            }
        };
        *cursor = c;
        return ParseOutcome::Matched(Node::Substitution {
            from: from.boxed(),
            to: to.boxed(),
        });
    }

    match repeated(&mut c) {
        ParseOutcome::Matched(count) => {
            let first = Node::Repeat {
                unit: from.boxed(),
                count: count.boxed(),
            };
            match compound_repeat(&mut c) {
                ParseOutcome::Matched(Node::CompoundRepeat(rest)) => {
                    let mut repeats = vec![first];
                    repeats.extend(rest);
                    *cursor = c;
                    ParseOutcome::Matched(Node::CompoundRepeat(repeats))
                }
                ParseOutcome::Matched(_) => unreachable!("compound_repeat always returns CompoundRepeat"),
                ParseOutcome::Unmatched => {
                    *cursor = c;
                    ParseOutcome::Matched(first)
                }
                ParseOutcome::Errored(e) => ParseOutcome::Errored(e),
            }
        }
        ParseOutcome::Unmatched => ParseOutcome::Unmatched,
        ParseOutcome::Errored(e) => ParseOutcome::Errored(e),
    }
}

/// `sequence | description`, the two forms an insert's material may take
/// besides a bare location or length.
fn sequence_or_description(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    match description(cursor) {
        ParseOutcome::Unmatched => sequence(cursor),
        other => other,
    }
}

/// (`sequence_or_description` | `location` | `length`) `inv`? `repeated`? `inv`?.
pub fn insert(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let body = match sequence_or_description(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => match location(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => match length(&mut c) {
                ParseOutcome::Matched(n) => n,
                ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
                ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
            },
            ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
        },
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    let mut inverted = match_str(&mut c, "inv");

    let repeat_count = match repeated(&mut c) {
        ParseOutcome::Matched(n) => Some(n.boxed()),
        ParseOutcome::Unmatched => None,
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching insert", e))
        }
    };

    if !inverted {
        inverted = match_str(&mut c, "inv");
    }

    *cursor = c;
    ParseOutcome::Matched(Node::Insert {
        body: body.boxed(),
        repeat: repeat_count,
        inverted,
    })
}

/// `'[' insert (';' insert)* ']' | insert`.
pub fn inserted(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    if match_char(&mut c, b'[') {
        let mut inserts = Vec::new();
        let first = match insert(&mut c) {
            ParseOutcome::Matched(n) => n,
            ParseOutcome::Unmatched => return err_here(&c, "expected an insert after '['"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching inserted", e))
            }
        };
        inserts.push(first);

        while match_char(&mut c, b';') {
            match insert(&mut c) {
                ParseOutcome::Matched(n) => inserts.push(n),
                ParseOutcome::Unmatched => return err_here(&c, "expected an insert after ';'"),
                ParseOutcome::Errored(e) => {
                    return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching inserted", e))
                }
            }
        }

        if !match_char(&mut c, b']') {
            return err_here(&c, "expected ']' to close a compound insert");
        }

        debug_assert!(!inserts.is_empty());
        *cursor = c;
        return ParseOutcome::Matched(Node::CompoundInsert(inserts));
    }

    insert(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_or_repeat_matches_substitution() {
        let mut c = Cursor::new("C>T");
        match substitution_or_repeat(&mut c) {
            ParseOutcome::Matched(Node::Substitution { .. }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn substitution_or_repeat_matches_repeat() {
        let mut c = Cursor::new("CAG[23]");
        match substitution_or_repeat(&mut c) {
            ParseOutcome::Matched(Node::Repeat { .. }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn substitution_or_repeat_matches_compound_repeat() {
        let mut c = Cursor::new("CAG[23]CAG[5]");
        match substitution_or_repeat(&mut c) {
            ParseOutcome::Matched(Node::CompoundRepeat(v)) => assert_eq!(v.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn insert_plain_sequence() {
        let mut c = Cursor::new("TT");
        match insert(&mut c) {
            ParseOutcome::Matched(Node::Insert {
                inverted: false,
                repeat: None,
                ..
            }) => {}
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(c.pos(), 2);
    }

    #[test]
    fn insert_with_inversion_and_repeat() {
        let mut c = Cursor::new("TTinv[2]");
        match insert(&mut c) {
            ParseOutcome::Matched(Node::Insert {
                inverted: true,
                repeat: Some(_),
                ..
            }) => {}
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(c.pos(), 8);
    }

    #[test]
    fn inserted_compound_form() {
        let mut c = Cursor::new("[TT;GG]");
        match inserted(&mut c) {
            ParseOutcome::Matched(Node::CompoundInsert(v)) => assert_eq!(v.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(c.pos(), 7);
    }

    #[test]
    fn inserted_singleton_form() {
        let mut c = Cursor::new("N");
        match inserted(&mut c) {
            ParseOutcome::Matched(Node::Insert { .. }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}
