//! Linearize a table's direct rows and sections into one row list.

use crate::data::table::{Section, Table};
use crate::data::value::Value;

/// Collect every row of `table` in display order.
///
/// Direct rows come first, untouched. Section rows follow, section by
/// section, each keeping its original order; a section's `first_column`
/// replaces column 0 of each of its rows. The table itself is not modified.
pub fn flatten_rows(table: &Table) -> Vec<Vec<Value>> {
    let section_rows: usize = table.sections.iter().map(|s| s.rows.len()).sum();
    let mut rows = Vec::with_capacity(table.rows.len() + section_rows);

    rows.extend(table.rows.iter().cloned());
    for section in &table.sections {
        rows.extend(section_rows_labeled(section));
    }

    rows
}

fn section_rows_labeled(section: &Section) -> impl Iterator<Item = Vec<Value>> + '_ {
    section.rows.iter().map(move |row| {
        let mut row = row.clone();
        if let (Some(label), Some(first)) = (&section.first_column, row.first_mut()) {
            *first = label.clone();
        }
        row
    })
}
