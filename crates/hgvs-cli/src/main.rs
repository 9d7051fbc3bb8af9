//! Command-line front end for `hgvs-parser`: parses its one positional
//! argument as an HGVS description, prints the input, the parsed tree (or
//! error chain), and a final verdict line, then exits non-zero on failure.

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use colored::Colorize;
use hgvs_parser::{parse_description, render_error, render_node, Format, ParseOutcome};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("usage: hgvs-parse [--color|--no-color] [-v|--verbose] <DESCRIPTION>")]
    MissingInput,
    #[error("unrecognized argument: {0}")]
    UnknownArgument(String),
}

struct Args {
    input: String,
    color_override: Option<bool>,
    verbose: u8,
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut input = None;
    let mut color_override = None;
    let mut verbose = 0u8;

    for arg in raw {
        match arg.as_str() {
            "--no-color" => color_override = Some(false),
            "--color" => color_override = Some(true),
            "-v" | "--verbose" => verbose += 1,
            _ if arg.starts_with('-') && arg != "-" => return Err(CliError::UnknownArgument(arg)),
            _ if input.is_none() => input = Some(arg),
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    Ok(Args {
        input: input.ok_or(CliError::MissingInput)?,
        color_override,
        verbose,
    })
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Color is on only when every one of these holds: no explicit `--no-color`,
/// `NO_COLOR` is unset, and the destination stream is a terminal. An explicit
/// `--color` always wins over the terminal check.
fn resolve_format(color_override: Option<bool>, stream_is_terminal: bool) -> Format {
    let enabled = match color_override {
        Some(choice) => choice,
        None => stream_is_terminal && std::env::var_os("NO_COLOR").is_none(),
    };
    if enabled {
        Format::Console
    } else {
        Format::Plain
    }
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.verbose);

    let stdout = io::stdout();
    let format = resolve_format(args.color_override, stdout.is_terminal());

    if run(&args.input, format, &mut stdout.lock()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Prints the input, the parse result, and the verdict line. Returns whether
/// the parse was accepted.
fn run(input: &str, format: Format, out: &mut impl Write) -> bool {
    writeln!(out, "{input}").ok();

    let outcome = parse_description(input);
    let accepted = outcome.is_matched();

    match &outcome {
        ParseOutcome::Matched(node) => {
            render_node(&mut *out, format, input, node).ok();
            writeln!(out).ok();
        }
        ParseOutcome::Errored(err) => {
            render_error(&mut *out, format, input, err).ok();
        }
        ParseOutcome::Unmatched => unreachable!("parse_description never returns Unmatched"),
    }

    let verdict = if accepted { "accepted." } else { "failed." };
    let verdict = match format {
        Format::Console if accepted => verdict.green().to_string(),
        Format::Console => verdict.red().to_string(),
        Format::Plain => verdict.to_string(),
    };
    writeln!(out, "{verdict}").ok();

    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_args_requires_a_positional_input() {
        let result = parse_args(std::iter::empty());
        assert!(matches!(result, Err(CliError::MissingInput)));
    }

    #[test]
    fn parse_args_accepts_flags_in_any_order() {
        let raw = vec!["--verbose".to_string(), "--no-color".to_string(), "c.76A>T".to_string()];
        let args = parse_args(raw.into_iter()).unwrap();
        assert_eq!(args.input, "c.76A>T");
        assert_eq!(args.color_override, Some(false));
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn resolve_format_respects_explicit_override() {
        assert_eq!(resolve_format(Some(true), false), Format::Console);
        assert_eq!(resolve_format(Some(false), true), Format::Plain);
    }

    #[test]
    fn run_reports_accepted_for_a_valid_description() {
        let mut buf = Vec::new();
        let accepted = run("NM_004006.2:c.4375C>T", Format::Plain, &mut buf);
        assert!(accepted);
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.trim_end().ends_with("accepted."));
    }

    #[test]
    fn run_reports_failed_for_an_invalid_description() {
        let mut buf = Vec::new();
        let accepted = run("not hgvs at all", Format::Plain, &mut buf);
        assert!(!accepted);
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.trim_end().ends_with("failed."));
    }
}
