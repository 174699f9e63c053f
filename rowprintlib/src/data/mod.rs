//! Table data: cell values and the table description.
//!
//! This module holds the first stage of the pipeline - the data a caller
//! builds before anything is printed:
//!
//! - **Value**: a displayable, comparable cell
//! - **Section**: rows sharing an optional first-column label
//! - **Table**: title, header, rows, sections, sort keys, notes and glyphs

pub mod table;
pub mod value;

pub use table::{Section, Table};
pub use value::Value;
