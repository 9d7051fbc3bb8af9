//! One module per family of grammar productions, each function named after
//! the non-terminal it implements. See `SPEC_FULL.md` §4.E for the matching
//! protocol every function here follows: take the cursor, return
//! `Matched`/`Unmatched`/`Errored`, and on `Unmatched` leave the cursor
//! exactly where it found it.

pub(crate) mod description;
pub(crate) mod identifier;
pub(crate) mod insert;
pub(crate) mod number;
pub(crate) mod operation;
pub(crate) mod position;
pub(crate) mod repeat;
pub(crate) mod sequence;
pub(crate) mod variant;

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseOutcome};
use crate::tree::Node;

/// Build an `Errored` outcome pointing at the cursor's current position.
/// Used for the leaf "expected X, found Y" diagnostics that fire once a
/// production has committed to a branch and a required element is missing.
pub(crate) fn err_here(cursor: &Cursor<'_>, message: impl Into<String>) -> ParseOutcome<Node> {
    ParseOutcome::Errored(ParseError::new(cursor.here(), message))
}
