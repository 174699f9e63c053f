//! Row set: a table's rows flattened, validated and sorted, ready to print.
//!
//! The pipeline is:
//! 1. Table (rows and sections as the caller built them)
//! 2. RowSet (flattened, checked for a uniform column count, sorted)
//! 3. Output (display strings with first-column dedup, laid out and written)

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::flatten::flatten_rows;
use super::sort::sort_rows;
use crate::data::table::Table;
use crate::data::value::Value;
use crate::error::TableError;
use crate::Result;

/// Rows of one table in final display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
    /// Number of columns shared by every row (and the header, if any)
    pub columns: usize,
    /// Data rows, flattened and sorted
    pub rows: Vec<Vec<Value>>,
}

impl RowSet {
    /// Build the row set for `table`.
    ///
    /// Flattens sections, checks that all rows and the header agree on the
    /// column count and that every sort key names an existing column, then
    /// applies the sort keys.
    pub fn from_table(table: &Table) -> Result<Self> {
        let mut rows = flatten_rows(table);
        let columns = check_columns(table, &rows)?;

        debug!(
            rows = rows.len(),
            sections = table.sections.len(),
            columns,
            "flattened table rows"
        );

        if !rows.is_empty() {
            if let Some(key) = table.sort_by.iter().find(|k| k.column >= columns) {
                return Err(TableError::SortColumnOutOfRange {
                    column: key.column,
                    columns,
                });
            }
        }
        sort_rows(&mut rows, &table.sort_by);

        Ok(RowSet { columns, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Data rows in display order
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
}

/// Column count shared by the header and every row.
///
/// The first row sets the count; with no rows the header does.
fn check_columns(table: &Table, rows: &[Vec<Value>]) -> Result<usize> {
    let header_columns = table.header_cells().map(|h| h.len());

    let Some(first) = rows.first() else {
        return Ok(header_columns.unwrap_or(0));
    };
    let expected = first.len();

    if let Some(found) = header_columns {
        if found != expected {
            return Err(TableError::HeaderColumnMismatch { expected, found });
        }
    }

    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(TableError::ColumnCountMismatch {
                row,
                expected,
                found: cells.len(),
            });
        }
    }

    Ok(expected)
}

impl Table {
    /// The table's rows after flattening and sorting.
    ///
    /// No display substitution happens here: empty values stay empty and
    /// repeated first-column values are kept, which suits structured encoders.
    pub fn as_rows(&self) -> Result<Vec<Vec<Value>>> {
        Ok(RowSet::from_table(self)?.rows)
    }
}
