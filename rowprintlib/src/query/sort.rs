//! Stable multi-key row sorting.

use std::cmp::Ordering;

use tracing::trace;

use super::options::ColumnSort;
use crate::data::value::Value;

/// Compare two rows by `keys` in priority order.
///
/// Each key compares its column with [`Value::compare`], reversed for
/// descending keys; the first non-equal result wins. A column missing from
/// either row compares equal.
pub fn compare_rows(a: &[Value], b: &[Value], keys: &[ColumnSort]) -> Ordering {
    for key in keys {
        let ordering = match (a.get(key.column), b.get(key.column)) {
            (Some(x), Some(y)) => x.compare(y),
            _ => Ordering::Equal,
        };
        let ordering = if key.asc { ordering } else { ordering.reverse() };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Sort `rows` in place by `keys`.
///
/// Rows that tie on every key keep their input order: the original position
/// is the final tie-break. Empty `keys` leaves the rows untouched.
pub fn sort_rows(rows: &mut Vec<Vec<Value>>, keys: &[ColumnSort]) {
    if keys.is_empty() || rows.len() < 2 {
        return;
    }

    trace!(rows = rows.len(), keys = ?keys, "sorting rows");

    let mut indexed: Vec<(usize, Vec<Value>)> = rows.drain(..).enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| compare_rows(a, b, keys).then(ia.cmp(ib)));
    rows.extend(indexed.into_iter().map(|(_, row)| row));
}
