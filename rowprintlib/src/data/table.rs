//! Table description: the configuration aggregate callers populate.

use serde::{Deserialize, Serialize};

use super::value::Value;
use crate::query::options::ColumnSort;

/// A group of rows sharing an optional first-column label.
///
/// When `first_column` is set it replaces column 0 of every row in the
/// section, so rows typically leave that cell empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Label injected into column 0 of each row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_column: Option<Value>,
    /// Rows of this section, in display order
    pub rows: Vec<Vec<Value>>,
}

impl Section {
    /// Create an empty, unlabeled section
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the first-column label
    pub fn first_column(mut self, value: impl Into<Value>) -> Self {
        self.first_column = Some(value.into());
        self
    }

    /// Builder: append a row
    pub fn row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

/// Everything needed to print one table.
///
/// A table is built fully populated, printed once and discarded. Printing
/// never modifies it.
///
/// ```rust
/// use rowprintlib::{ColumnSort, Table, Value};
///
/// let table = Table::new()
///     .content("things")
///     .header(["Name", "Count"])
///     .row([Value::from("a"), Value::from(1)])
///     .row([Value::from("b"), Value::from(2)])
///     .sort_by(ColumnSort::desc(1));
///
/// let output = table.render_to_string().unwrap();
/// assert_eq!(output, "Name  Count  \nb     2      \na     1      \n\n2 things\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Line printed above the table
    pub title: String,
    /// Noun used in the `<count> <content>` footer
    pub content: String,
    /// Plain header labels
    pub header: Vec<String>,
    /// Header cells as values; preferred over `header` when both are set
    pub header_vals: Vec<Value>,
    /// Directly supplied rows
    pub rows: Vec<Vec<Value>>,
    /// Grouped rows, appended after `rows`
    pub sections: Vec<Section>,
    /// Sort keys, highest priority first
    pub sort_by: Vec<ColumnSort>,
    /// Lines printed below the table
    pub notes: Vec<String>,
    /// Padding glyph (a single space when empty)
    pub background_str: String,
    /// Column separator and line terminator (two spaces when empty)
    pub border_str: String,
    /// Show repeated first-column values instead of `~`
    pub fill_first_column: bool,
}

impl Table {
    /// Create an empty table with default glyphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: set the footer noun
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Builder: set plain header labels
    pub fn header<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set header cells as values
    pub fn header_vals<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.header_vals = values.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: append a row
    pub fn row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    /// Builder: append a section
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Builder: append a sort key (lower priority than those already added)
    pub fn sort_by(mut self, key: ColumnSort) -> Self {
        self.sort_by.push(key);
        self
    }

    /// Builder: append a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Builder: set the padding glyph
    pub fn background(mut self, glyph: impl Into<String>) -> Self {
        self.background_str = glyph.into();
        self
    }

    /// Builder: set the column separator
    pub fn border(mut self, glyph: impl Into<String>) -> Self {
        self.border_str = glyph.into();
        self
    }

    /// Builder: enable or disable first-column fill
    pub fn fill_first_column(mut self, fill: bool) -> Self {
        self.fill_first_column = fill;
        self
    }

    /// Header cells to print, if the table has a header.
    ///
    /// `header_vals` takes precedence over `header`.
    pub fn header_cells(&self) -> Option<Vec<String>> {
        if !self.header_vals.is_empty() {
            Some(self.header_vals.iter().map(ToString::to_string).collect())
        } else if !self.header.is_empty() {
            Some(self.header.clone())
        } else {
            None
        }
    }

    /// Whether a header row will be printed
    pub fn has_header(&self) -> bool {
        !self.header_vals.is_empty() || !self.header.is_empty()
    }
}
