//! # rowprintlib
//!
//! Fixed-width plain-text tables for terminal output.
//!
//! ## Overview
//!
//! A [`Table`] describes everything that gets printed: an optional title, a
//! header, rows of [`Value`]s (directly or grouped into [`Section`]s), sort
//! keys, notes and a footer noun. Printing runs a short pipeline:
//!
//! 1. **Flatten**: section rows are appended after direct rows, each
//!    section's first-column label applied
//! 2. **Sort**: stable multi-key sort, per-key direction
//! 3. **Dedup**: a first-column value equal to the one above prints as `~`
//! 4. **Layout**: columns padded to their widest line, multi-line cells
//!    expanded, columns joined by the border glyph
//!
//! ## Features
//!
//! - **Typed cells**: strings, numbers, booleans, byte sizes, times, errors
//! - **Multi-key sorting**: each key ascending or descending
//! - **Multi-line cells**: embedded newlines expand the row
//! - **Deterministic output**: same table, same bytes
//!
//! ## Example
//!
//! ```rust
//! use rowprintlib::{Section, Table, Value};
//!
//! let table = Table::new()
//!     .content("things")
//!     .header(["Name", "Size"])
//!     .section(
//!         Section::new()
//!             .first_column("disk")
//!             .row([Value::None, Value::bytes(2048)])
//!             .row([Value::None, Value::bytes(512)]),
//!     )
//!     .background(".")
//!     .border("|");
//!
//! let mut out = Vec::new();
//! table.print(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Name|Size...|\ndisk|2.0 KiB|\n~...|512 B..|\n\n2 things\n"
//! );
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;

pub use data::{Section, Table, Value};
pub use error::TableError;
pub use output::{render, render_rows};
pub use query::{ColumnSort, RowSet};

/// Result type for rowprintlib operations
pub type Result<T> = std::result::Result<T, TableError>;
