//! Tag-dispatch pretty-printer: walks a [`Node`] (or a [`ParseError`] chain)
//! and writes it back out, either as plain bytes or interleaved with ANSI
//! escapes.
//!
//! The printer never queries the environment: whether to colorize is decided
//! once by the caller (the CLI layer, informed by terminal detection and
//! `NO_COLOR`) and handed down as a [`Format`].

use std::io::{self, Write};

use crate::error::ParseError;
use crate::tree::{Anchor, LengthValue, Node, NumberValue, Sign};

const RESET: &str = "\x1b[0m";
const MAGENTA: &str = "\x1b[35m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const BOLD_WHITE: &str = "\x1b[1;37m";
const BOLD_RED: &str = "\x1b[1;31m";

/// Whether the printer should emit raw bytes or interleave ANSI color codes.
/// Decided once by the caller; the printer itself never inspects the
/// environment to pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Plain,
    Console,
}

struct Printer<'a, W> {
    writer: W,
    format: Format,
    input: &'a str,
}

impl<'a, W: Write> Printer<'a, W> {
    fn colored(&mut self, code: &str, text: &str) -> io::Result<()> {
        match self.format {
            Format::Plain => write!(self.writer, "{text}"),
            Format::Console => write!(self.writer, "{code}{text}{RESET}"),
        }
    }

    fn plain(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")
    }

    fn node(&mut self, node: &Node) -> io::Result<()> {
        match node {
            Node::Unknown => self.plain("?"),
            Node::Number(NumberValue::Value(v)) => self.colored(CYAN, &v.to_string()),
            Node::Number(NumberValue::OutOfRange(span)) => self.colored(CYAN, span.resolve(self.input)),
            Node::Sequence(span) => self.colored(BOLD_WHITE, span.resolve(self.input)),
            Node::Identifier(span) => self.colored(BOLD_WHITE, span.resolve(self.input)),
            Node::Equal(payload) => {
                self.colored(GREEN, "=")?;
                self.optional(payload)
            }
            Node::Slice => Ok(()),

            Node::Offset { sign, magnitude } => {
                self.colored(MAGENTA, if *sign == Sign::Positive { "+" } else { "-" })?;
                self.node(magnitude)
            }
            Node::Point {
                anchor,
                magnitude,
                offset,
            } => {
                match anchor {
                    Anchor::None => {}
                    Anchor::Upstream => self.colored(MAGENTA, "-")?,
                    Anchor::Downstream => self.colored(MAGENTA, "*")?,
                }
                self.node(magnitude)?;
                self.optional(offset)
            }
            Node::UncertainPoint { low, high } => {
                self.plain("(")?;
                self.node(low)?;
                self.plain("_")?;
                self.node(high)?;
                self.plain(")")
            }
            Node::Range { start, end } => {
                self.node(start)?;
                self.plain("_")?;
                self.node(end)
            }
            Node::Length(value) => {
                self.plain("(")?;
                match value {
                    LengthValue::Single(n) => self.node(n)?,
                    LengthValue::Range(a, b) => {
                        self.node(a)?;
                        self.plain("_")?;
                        self.node(b)?;
                    }
                }
                self.plain(")")
            }

            Node::Reference { name, nested } => {
                self.colored(BOLD_WHITE, name.resolve(self.input))?;
                if let Some(inner) = nested {
                    self.plain("(")?;
                    self.node(inner)?;
                    self.plain(")")?;
                }
                Ok(())
            }
            Node::Description {
                reference,
                coordinate_system,
                allele,
            } => {
                self.node(reference)?;
                self.plain(":")?;
                if let Some(letter) = coordinate_system {
                    self.colored(GREEN, &(*letter as char).to_string())?;
                    self.plain(".")?;
                }
                self.node(allele)
            }
            Node::Insert {
                body,
                repeat,
                inverted,
            } => {
                self.node(body)?;
                if let Some(count) = repeat {
                    self.plain("[")?;
                    self.node(count)?;
                    self.plain("]")?;
                }
                if *inverted {
                    self.colored(GREEN, "inv")?;
                }
                Ok(())
            }
            Node::CompoundInsert(items) => self.bracketed_list(items),

            Node::Substitution { from, to } => {
                self.node(from)?;
                self.colored(MAGENTA, ">")?;
                self.node(to)
            }
            Node::Repeat { unit, count } => {
                self.node(unit)?;
                self.plain("[")?;
                self.node(count)?;
                self.plain("]")
            }
            Node::CompoundRepeat(items) => {
                for item in items {
                    self.node(item)?;
                }
                Ok(())
            }
            Node::Deletion(payload) => {
                self.colored(GREEN, "del")?;
                self.optional(payload)
            }
            Node::DeletionInsertion { deleted, inserted } => {
                self.colored(GREEN, "del")?;
                self.optional(deleted)?;
                self.colored(GREEN, "ins")?;
                self.node(inserted)
            }
            Node::Insertion(body) => {
                self.colored(GREEN, "ins")?;
                self.node(body)
            }
            Node::Duplication(payload) => {
                self.colored(GREEN, "dup")?;
                self.optional(payload)
            }
            Node::Conversion(body) => {
                self.colored(GREEN, "con")?;
                self.node(body)
            }
            Node::Inversion(payload) => {
                self.colored(GREEN, "inv")?;
                self.optional(payload)
            }
            Node::Variant { location, operation } => {
                self.node(location)?;
                self.node(operation)
            }
            Node::CompoundVariant(items) => self.bracketed_list(items),
        }
    }

    fn optional(&mut self, payload: &Option<Box<Node>>) -> io::Result<()> {
        match payload {
            Some(n) => self.node(n),
            None => Ok(()),
        }
    }

    fn bracketed_list(&mut self, items: &[Node]) -> io::Result<()> {
        debug_assert!(!items.is_empty());
        self.plain("[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.plain(";")?;
            }
            self.node(item)?;
        }
        self.plain("]")
    }
}

/// Render `node` to `writer`, following `format`'s color policy.
pub fn render_node(writer: impl Write, format: Format, input: &str, node: &Node) -> io::Result<()> {
    Printer { writer, format, input }.node(node)
}

/// Render a [`ParseError`] chain, innermost cause first, each level as a
/// caret under `span.start` followed by its message.
pub fn render_error(mut writer: impl Write, format: Format, input: &str, error: &ParseError) -> io::Result<()> {
    let chain: Vec<&ParseError> = error.chain().collect();
    for err in chain.into_iter().rev() {
        let caret_line = format!("{}^", " ".repeat(err.span.start));
        match format {
            Format::Plain => writeln!(writer, "{caret_line}")?,
            Format::Console => writeln!(writer, "{BOLD_RED}{caret_line}{RESET}")?,
        }
        match format {
            Format::Plain => writeln!(writer, "{}", err.message)?,
            Format::Console => writeln!(writer, "{MAGENTA}{}{RESET}", err.message)?,
        }
    }
    let _ = input;
    Ok(())
}
