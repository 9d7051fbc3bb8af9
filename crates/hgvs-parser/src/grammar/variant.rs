use super::err_here;
use super::insert::{substitution, substitution_or_repeat};
use super::operation::{
    conversion, deletion_or_deletion_insertion, duplication, equal, insertion, inversion,
};
use super::position::location;
use super::repeat::{compound_repeat, repeated};
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::match_char;
use crate::tree::Node;

/// `location (substitution_or_repeat | substitution | deletion[_insertion] |
/// insertion | duplication | inversion | conversion | equal | repeated
/// compound_repeat?)?`. A location with no recognized body attaches an empty
/// `Slice` marker.
pub fn variant(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let loc = match location(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    macro_rules! try_body {
        ($result:expr) => {
            match $result {
                ParseOutcome::Matched(n) => {
                    *cursor = c;
                    return ParseOutcome::Matched(Node::Variant {
                        location: loc.boxed(),
                        operation: n.boxed(),
                    });
                }
                ParseOutcome::Unmatched => {}
                ParseOutcome::Errored(e) => {
                    return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching variant", e))
                }
            }
        };
    }

    try_body!(substitution_or_repeat(&mut c));
    try_body!(substitution(&mut c));
    try_body!(deletion_or_deletion_insertion(&mut c));
    try_body!(insertion(&mut c));
    try_body!(duplication(&mut c));
    try_body!(inversion(&mut c));
    try_body!(conversion(&mut c));
    try_body!(equal(&mut c));

    match repeated(&mut c) {
        ParseOutcome::Matched(count) => {
            let first = Node::Repeat {
                unit: loc.clone().boxed(),
                count: count.boxed(),
            };
            let operation = match compound_repeat(&mut c) {
                ParseOutcome::Matched(Node::CompoundRepeat(rest)) => {
                    let mut repeats = vec![first];
                    repeats.extend(rest);
                    Node::CompoundRepeat(repeats)
                }
                ParseOutcome::Matched(_) => unreachable!("compound_repeat always returns CompoundRepeat"),
                ParseOutcome::Unmatched => first,
                ParseOutcome::Errored(e) => {
                    return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching variant", e))
                }
            };
            *cursor = c;
            return ParseOutcome::Matched(Node::Variant {
                location: loc.boxed(),
                operation: operation.boxed(),
            });
        }
        ParseOutcome::Unmatched => {}
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching variant", e))
        }
    }

    *cursor = c;
    ParseOutcome::Matched(Node::Variant {
        location: loc.boxed(),
        operation: Node::Slice.boxed(),
    })
}

/// `'[' ('=' | variant (';' variant)*) ']' | variant`.
pub fn allele(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    if !match_char(&mut c, b'[') {
        return variant(cursor);
    }

    if match_char(&mut c, b'=') {
        if !match_char(&mut c, b']') {
            return err_here(&c, "expected ']' after a bare '=' allele");
        }
        *cursor = c;
        return ParseOutcome::Matched(Node::Equal(None));
    }

    let mut variants = Vec::new();
    let first = match variant(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected '=' or a variant after '['"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching allele", e))
        }
    };
    variants.push(first);

    while match_char(&mut c, b';') {
        match variant(&mut c) {
            ParseOutcome::Matched(n) => variants.push(n),
            ParseOutcome::Unmatched => return err_here(&c, "expected a variant after ';'"),
            ParseOutcome::Errored(e) => {
                return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching allele", e))
            }
        }
    }

    if !match_char(&mut c, b']') {
        return err_here(&c, "expected ']' to close an allele");
    }

    debug_assert!(!variants.is_empty());
    *cursor = c;
    ParseOutcome::Matched(Node::CompoundVariant(variants))
}
