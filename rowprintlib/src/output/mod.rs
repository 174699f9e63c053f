//! Output formatting: print rows as fixed-width text.
//!
//! This module handles the final stage of the pipeline:
//!
//! - **Dedup**: display strings, `-` for empty values, `~` for repeated
//!   first-column values
//! - **Layout**: column widths and multi-line cell expansion
//! - **Writer**: title, header, rows, notes and footer written to a sink

pub mod dedup;
pub mod layout;
pub mod writer;

pub use dedup::{display_rows, EMPTY, PLACEHOLDER};
pub use layout::Layout;
pub use writer::{render, render_rows};
