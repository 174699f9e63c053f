//! Display strings for data rows, with first-column deduplication.

use crate::data::value::Value;

/// Shown in column 0 when a row repeats the previous row's value.
pub const PLACEHOLDER: &str = "~";

/// Shown for empty or absent values.
pub const EMPTY: &str = "-";

/// Display text of one cell; empty values become [`EMPTY`].
pub fn cell_text(value: &Value) -> String {
    let text = value.to_string();
    if text.is_empty() {
        EMPTY.to_string()
    } else {
        text
    }
}

/// Turn sorted rows into display strings.
///
/// Unless `fill_first_column` is set, a column-0 value equal to the one in
/// the row directly above is replaced by [`PLACEHOLDER`]. Equality is checked
/// on the original values, so a run of three equal values yields one value
/// and two placeholders.
pub fn display_rows(rows: &[Vec<Value>], fill_first_column: bool) -> Vec<Vec<String>> {
    let mut previous: Option<&Value> = None;
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let first = row.first();
        let repeated = !fill_first_column && first.is_some() && first == previous;

        let cells = row
            .iter()
            .enumerate()
            .map(|(col, value)| {
                if col == 0 && repeated {
                    PLACEHOLDER.to_string()
                } else {
                    cell_text(value)
                }
            })
            .collect();

        out.push(cells);
        previous = first;
    }

    out
}
