//! Recursive-descent parser for HGVS nucleotide variant descriptions.
//!
//! The entry point is [`parse_description`]. See `grammar` for the
//! production-by-production implementation and `printer` for rendering a
//! parsed tree (or a failed parse's diagnostic chain) back out.

mod classify;
mod cursor;
mod error;
mod grammar;
mod lex;
mod printer;
mod span;
mod tree;

pub use cursor::Cursor;
pub use error::{ParseError, ParseOutcome};
pub use printer::{render_error, render_node, Format};
pub use span::Span;
pub use tree::{Anchor, LengthValue, Node, NumberValue, Sign};

/// Parse a single HGVS description (`reference:allele`) from `input`.
///
/// Drives the `description` production, then requires the whole string to
/// have been consumed: a successful parse that leaves trailing bytes is
/// rewritten into a trailing-input [`ParseError`] rather than silently
/// accepted.
#[tracing::instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn parse_description(input: &str) -> ParseOutcome<Node> {
    let mut cursor = Cursor::new(input);

    let outcome = match grammar::description::description(&mut cursor) {
        ParseOutcome::Matched(node) => {
            if cursor.is_at_end() {
                ParseOutcome::Matched(node)
            } else {
                tracing::trace!(pos = cursor.pos(), "trailing input after a complete description");
                ParseOutcome::Errored(ParseError::new(
                    cursor.here(),
                    "trailing input after a complete description",
                ))
            }
        }
        ParseOutcome::Unmatched => ParseOutcome::Errored(ParseError::new(
            cursor.here(),
            "expected a description: REFERENCE ':' ALLELE",
        )),
        ParseOutcome::Errored(e) => ParseOutcome::Errored(e),
    };

    match &outcome {
        ParseOutcome::Matched(_) => tracing::debug!("parse accepted"),
        ParseOutcome::Errored(e) => tracing::debug!(span = ?e.span, message = %e.message, "parse failed"),
        ParseOutcome::Unmatched => unreachable!("parse_description never returns Unmatched"),
    }

    outcome
}
