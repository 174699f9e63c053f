//! Writing a table to an output sink.
//!
//! Output layout, each block separated by one blank line:
//!
//! ```text
//! <title>
//!
//! <header row>
//! <data rows>
//!
//! <notes>
//!
//! <count> <content>
//! ```
//!
//! The title only appears when set. Notes and the footer form a trailer that
//! only headed tables carry; headerless tables print their rows and nothing
//! after them.

use std::io::Write;

use tracing::debug;

use super::dedup::display_rows;
use super::layout::Layout;
use crate::data::table::Table;
use crate::query::rowset::RowSet;
use crate::Result;

/// Print `table` to `out`.
///
/// Rows are flattened, sorted, deduplicated and laid out before anything is
/// written. Errors are either a malformed table (nothing written) or a
/// failure of `out` itself.
pub fn render<W: Write + ?Sized>(table: &Table, out: &mut W) -> Result<()> {
    let rows = RowSet::from_table(table)?;
    render_rows(table, &rows, out)
}

/// Print `table` using an already prepared row set.
///
/// `rows` supplies the data rows in final order; the table supplies the
/// title, header, notes, footer and glyphs.
pub fn render_rows<W: Write + ?Sized>(table: &Table, rows: &RowSet, out: &mut W) -> Result<()> {
    let header = table.header_cells();
    let body = display_rows(rows.rows(), table.fill_first_column);

    let lines = header.iter().chain(body.iter()).map(Vec::as_slice);
    let layout = Layout::measure(lines, &table.background_str, &table.border_str);
    debug!(widths = ?layout.widths, rows = body.len(), "computed column widths");

    if !table.title.is_empty() {
        writeln!(out, "{}", table.title)?;
        writeln!(out)?;
    }

    if let Some(header) = &header {
        write_lines(out, &layout.render_row(header))?;
    }

    for cells in &body {
        write_lines(out, &layout.render_row(cells))?;
    }

    if header.is_some() {
        if !table.notes.is_empty() {
            writeln!(out)?;
            for note in &table.notes {
                writeln!(out, "{}", note)?;
            }
        }

        if !table.content.is_empty() {
            writeln!(out)?;
            writeln!(out, "{} {}", rows.len(), table.content)?;
        }
    }

    Ok(())
}

fn write_lines<W: Write + ?Sized>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

impl Table {
    /// Print this table to `out`. See [`render`].
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        render(self, out)
    }

    /// Print this table into a new string.
    pub fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        render(self, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
