use super::err_here;
use super::identifier::reference;
use super::variant::allele;
use crate::classify::is_alpha;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::lex::match_char;
use crate::tree::Node;

/// `reference ':' (letter '.')? allele`.
pub fn description(cursor: &mut Cursor<'_>) -> ParseOutcome<Node> {
    let entry = *cursor;
    let mut c = *cursor;

    let reference_node = match reference(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return ParseOutcome::Unmatched,
        ParseOutcome::Errored(e) => return ParseOutcome::Errored(e),
    };

    if !match_char(&mut c, b':') {
        return ParseOutcome::Unmatched;
    }

    let coordinate_system = {
        let mut probe = c;
        match probe.peek_byte() {
            Some(b) if is_alpha(b) && probe.peek_byte_n(1) == Some(b'.') => {
                probe.bump();
                probe.bump();
                c = probe;
                Some(b)
            }
            _ => None,
        }
    };

    let allele_node = match allele(&mut c) {
        ParseOutcome::Matched(n) => n,
        ParseOutcome::Unmatched => return err_here(&c, "expected an allele after ':'"),
        ParseOutcome::Errored(e) => {
            return ParseOutcome::Errored(ParseError::wrap(entry.here(), "while matching description", e))
        }
    };

    *cursor = c;
    ParseOutcome::Matched(Node::Description {
        reference: reference_node.boxed(),
        coordinate_system,
        allele: allele_node.boxed(),
    })
}
