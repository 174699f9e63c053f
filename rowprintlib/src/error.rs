//! Error types for rowprintlib

use thiserror::Error;

/// Errors that can occur while preparing or printing a table.
///
/// Everything except [`TableError::Io`] is a malformed table: the caller built
/// rows that do not line up, or asked to sort by a column that does not exist.
#[derive(Error, Debug)]
pub enum TableError {
    /// A data row has a different number of cells than the rest of the table
    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Header and data rows disagree on the column count
    #[error("header has {found} columns but rows have {expected}")]
    HeaderColumnMismatch { expected: usize, found: usize },

    /// A sort key points past the last column
    #[error("cannot sort by column {column}: table has {columns} columns")]
    SortColumnOutOfRange { column: usize, columns: usize },

    /// Writing to the output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
