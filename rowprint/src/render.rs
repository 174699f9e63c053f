//! Loading table documents and applying command-line overrides

use std::fs;
use std::io::{self, Read, Write};

use anyhow::Context;
use clap::ArgMatches;
use rowprintlib::{ColumnSort, Table};
use tracing::debug;

/// Path value meaning "read the document from stdin"
pub const STDIN_PATH: &str = "-";

/// Table fields that can be set from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub title: Option<String>,
    pub content: Option<String>,
    pub border: Option<String>,
    pub background: Option<String>,
    pub fill_first_column: bool,
    /// Replaces the document's sort keys when non-empty
    pub sort: Vec<ColumnSort>,
    /// Appended to the document's notes
    pub notes: Vec<String>,
}

impl Overrides {
    /// Extract overrides from parsed arguments
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Overrides {
            title: matches.get_one::<String>("title").cloned(),
            content: matches.get_one::<String>("content").cloned(),
            border: matches.get_one::<String>("border").cloned(),
            background: matches.get_one::<String>("background").cloned(),
            fill_first_column: matches.get_flag("fill-first-column"),
            sort: matches
                .get_many::<ColumnSort>("sort")
                .map(|v| v.copied().collect())
                .unwrap_or_default(),
            notes: matches
                .get_many::<String>("note")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Apply these overrides on top of a loaded table
    pub fn apply(self, mut table: Table) -> Table {
        if let Some(title) = self.title {
            table.title = title;
        }
        if let Some(content) = self.content {
            table.content = content;
        }
        if let Some(border) = self.border {
            table.border_str = border;
        }
        if let Some(background) = self.background {
            table.background_str = background;
        }
        if self.fill_first_column {
            table.fill_first_column = true;
        }
        if !self.sort.is_empty() {
            table.sort_by = self.sort;
        }
        table.notes.extend(self.notes);
        table
    }
}

/// Parse a JSON table document
pub fn parse_table(text: &str) -> anyhow::Result<Table> {
    serde_json::from_str(text).context("invalid table document")
}

/// Read and parse a table document from a file, or stdin for `-`
pub fn load_table(path: &str) -> anyhow::Result<Table> {
    let text = if path == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read table document from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read table document '{}'", path))?
    };

    let table = parse_table(&text).with_context(|| format!("while loading '{}'", path))?;
    debug!(
        path,
        rows = table.rows.len(),
        sections = table.sections.len(),
        "loaded table document"
    );
    Ok(table)
}

/// Print `table` to `out` and flush it
pub fn print_table<W: Write>(table: &Table, out: &mut W) -> anyhow::Result<()> {
    table.print(out).context("failed to print table")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Table {
        parse_table(
            r#"{
                "header": ["Name", "Count"],
                "rows": [["a", 1], ["b", 2]],
                "sort_by": [{"column": 1}],
                "notes": ["from document"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_table() {
        let table = sample();
        assert_eq!(table.header, vec!["Name", "Count"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.sort_by, vec![ColumnSort::desc(1)]);
    }

    #[test]
    fn test_parse_table_rejects_garbage() {
        let err = parse_table("{not json").unwrap_err();
        assert!(err.to_string().contains("invalid table document"));
    }

    #[test]
    fn test_empty_overrides_keep_document() {
        let table = Overrides::default().apply(sample());
        assert_eq!(table, sample());
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = Overrides {
            title: Some("Counts".to_string()),
            content: Some("items".to_string()),
            border: Some("|".to_string()),
            background: Some(".".to_string()),
            fill_first_column: true,
            sort: vec![ColumnSort::asc(0)],
            notes: vec!["from flags".to_string()],
        };
        let table = overrides.apply(sample());

        assert_eq!(table.title, "Counts");
        assert_eq!(table.content, "items");
        assert_eq!(table.border_str, "|");
        assert_eq!(table.background_str, ".");
        assert!(table.fill_first_column);
        assert_eq!(table.sort_by, vec![ColumnSort::asc(0)]);
        assert_eq!(table.notes, vec!["from document", "from flags"]);
    }

    #[test]
    fn test_print_table() {
        let table = Overrides {
            content: Some("items".to_string()),
            border: Some("|".to_string()),
            background: Some(".".to_string()),
            ..Overrides::default()
        }
        .apply(sample());

        let mut out = Vec::new();
        print_table(&table, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name|Count|\nb...|2....|\na...|1....|\n\nfrom document\n\n2 items\n"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_table("/nonexistent/table.json").unwrap_err();
        assert!(err.to_string().contains("failed to read table document"));
    }
}
