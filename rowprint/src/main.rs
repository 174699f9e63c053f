//! # rowprint
//!
//! A CLI tool for printing table documents as fixed-width plain text.
//!
//! ## Overview
//!
//! rowprint is built on top of rowprintlib. It reads a JSON description of a
//! table (title, header, rows, sections, sort keys, notes, glyphs), lets the
//! command line override the presentation fields, and prints the result.
//!
//! ## Usage
//!
//! ```bash
//! # Print a table document
//! rowprint disks.json
//!
//! # Read from stdin, sort by column 1 descending then column 0 ascending
//! cat disks.json | rowprint --sort 1 --sort 0:asc
//!
//! # Visible glyphs, keep repeated first-column values
//! rowprint disks.json --border '|' --background '.' --fill-first-column
//! ```
//!
//! ## Document format
//!
//! ```json
//! {
//!   "title": "Disks",
//!   "content": "disks",
//!   "header": ["Name", "Size"],
//!   "rows": [["sda", {"bytes": 1048576}], ["sdb", null]],
//!   "sort_by": [{"column": 1, "asc": false}]
//! }
//! ```

mod render;

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rowprintlib::ColumnSort;
use tracing_subscriber::EnvFilter;

use render::{load_table, print_table, Overrides, STDIN_PATH};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("rowprint")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print JSON table documents as fixed-width plain-text tables")
        .arg(
            Arg::new("file")
                .help("Table document (JSON); '-' reads stdin")
                .default_value(STDIN_PATH),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .help("Title printed above the table"),
        )
        .arg(
            Arg::new("content")
                .long("content")
                .help("Noun for the '<count> <content>' footer"),
        )
        .arg(
            Arg::new("border")
                .short('b')
                .long("border")
                .help("Column separator (default: two spaces)"),
        )
        .arg(
            Arg::new("background")
                .long("background")
                .help("Padding glyph (default: space)"),
        )
        .arg(
            Arg::new("fill-first-column")
                .long("fill-first-column")
                .action(ArgAction::SetTrue)
                .help("Print repeated first-column values instead of '~'"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .action(ArgAction::Append)
                .value_parser(value_parser!(ColumnSort))
                .help("Sort key COL[:asc|:desc], highest priority first (can be repeated)"),
        )
        .arg(
            Arg::new("note")
                .short('n')
                .long("note")
                .action(ArgAction::Append)
                .help("Note printed below the table (can be repeated)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log pipeline details to stderr"),
        )
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug over warn.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or(STDIN_PATH);

    let table = Overrides::from_matches(matches).apply(load_table(path)?);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    print_table(&table, &mut out)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_overrides_from_args() {
        let matches = build_command().get_matches_from([
            "rowprint",
            "table.json",
            "--sort",
            "1",
            "--sort",
            "0:asc",
            "--note",
            "n1",
            "--border",
            "|",
            "--fill-first-column",
        ]);
        let overrides = Overrides::from_matches(&matches);

        assert_eq!(
            matches.get_one::<String>("file").map(String::as_str),
            Some("table.json")
        );
        assert_eq!(overrides.sort, vec![ColumnSort::desc(1), ColumnSort::asc(0)]);
        assert_eq!(overrides.notes, vec!["n1"]);
        assert_eq!(overrides.border.as_deref(), Some("|"));
        assert!(overrides.fill_first_column);
        assert_eq!(overrides.title, None);
    }

    #[test]
    fn test_invalid_sort_key_is_rejected() {
        let result = build_command().try_get_matches_from(["rowprint", "--sort", "x:up"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_defaults_to_stdin() {
        let matches = build_command().get_matches_from(["rowprint"]);
        assert_eq!(
            matches.get_one::<String>("file").map(String::as_str),
            Some(STDIN_PATH)
        );
    }
}
