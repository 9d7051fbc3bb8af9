use crate::{Node, Span};

/// One link in a diagnostic chain: a position, a message, and the causally
/// prior error (innermost first). See `SPEC_FULL.md` §4.D for why this is a
/// type disjoint from [`Node`] rather than a tag living in the same enum.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub span: Span,
    pub message: String,
    pub next: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        ParseError {
            span,
            message: message.into(),
            next: None,
        }
    }

    /// Wrap `next` (the causally prior error, if any) with a new outer
    /// context: `while matching <production>` style messages, attached at
    /// `span` (usually the start of the enclosing production).
    pub fn wrap(span: Span, message: impl Into<String>, next: ParseError) -> Self {
        ParseError {
            span,
            message: message.into(),
            next: Some(Box::new(next)),
        }
    }

    /// Walk the chain outermost-to-innermost (`self` first, then each
    /// `next` in turn). `render_error` reverses this before printing, since
    /// the original design renders the rest of the chain first, then the
    /// node's own caret.
    pub fn chain(&self) -> impl Iterator<Item = &ParseError> {
        ChainIter { current: Some(self) }
    }
}

struct ChainIter<'a> {
    current: Option<&'a ParseError>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a ParseError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.next.as_deref();
        Some(current)
    }
}

/// The three-valued result every grammar production returns. See
/// `SPEC_FULL.md` §4.E for the full matching protocol this supports.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T = Node> {
    /// The production matched; the cursor has advanced past what it
    /// consumed.
    Matched(T),
    /// The production did not match; the cursor must be treated as
    /// untouched by the caller. No diagnostic is raised.
    Unmatched,
    /// The production committed to a branch and then failed; the cursor is
    /// left at the fault position.
    Errored(ParseError),
}

impl<T> ParseOutcome<T> {
    pub fn is_matched(&self) -> bool {
        matches!(self, ParseOutcome::Matched(_))
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, ParseOutcome::Unmatched)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, ParseOutcome::Errored(_))
    }

    /// Wrap an `Errored` outcome with an outer context message; leaves
    /// `Matched`/`Unmatched` untouched. The common tail of rule 4 in §4.E.
    pub fn wrap_error(self, span: Span, message: impl Into<String>) -> Self {
        match self {
            ParseOutcome::Errored(err) => ParseOutcome::Errored(ParseError::wrap(span, message, err)),
            other => other,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            ParseOutcome::Matched(t) => ParseOutcome::Matched(f(t)),
            ParseOutcome::Unmatched => ParseOutcome::Unmatched,
            ParseOutcome::Errored(e) => ParseOutcome::Errored(e),
        }
    }
}
