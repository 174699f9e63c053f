//! Query processing: flatten and sort rows.
//!
//! This module turns a table's rows and sections into the single ordered row
//! list that gets printed. It provides:
//!
//! - **Options**: sort keys (`ColumnSort`)
//! - **Flatten**: sections merged into rows with their first-column label
//! - **Sort**: stable multi-key comparison
//! - **RowSet**: validated, sorted rows ready for output
//!
//! ## Example
//!
//! ```rust
//! use rowprintlib::query::{ColumnSort, RowSet};
//! use rowprintlib::Table;
//!
//! let table = Table::new()
//!     .row(["b", "1"])
//!     .row(["a", "2"])
//!     .sort_by(ColumnSort::asc(0));
//! let rows = RowSet::from_table(&table).unwrap();
//! assert_eq!(rows.rows()[0][0].to_string(), "a");
//! ```

pub mod flatten;
pub mod options;
pub mod rowset;
pub mod sort;

pub use flatten::flatten_rows;
pub use options::ColumnSort;
pub use rowset::RowSet;
pub use sort::{compare_rows, sort_rows};
