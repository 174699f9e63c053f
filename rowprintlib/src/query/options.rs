//! Sort options for table rows.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One sort key: a column index and a direction.
///
/// Descending is the default direction. A table's keys form a priority list;
/// each key only breaks ties left by the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnSort {
    /// 0-based column index
    pub column: usize,
    /// Sort ascending instead of descending
    #[serde(default)]
    pub asc: bool,
}

impl ColumnSort {
    /// Sort by `column`, smallest first
    pub fn asc(column: usize) -> Self {
        Self { column, asc: true }
    }

    /// Sort by `column`, largest first
    pub fn desc(column: usize) -> Self {
        Self { column, asc: false }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.asc = true;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.asc = false;
        self
    }
}

impl FromStr for ColumnSort {
    type Err = String;

    /// Parses `"<column>"`, `"<column>:asc"` or `"<column>:desc"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once(':') {
            Some((column, direction)) => (column, Some(direction)),
            None => (s, None),
        };

        let column: usize = column
            .trim()
            .parse()
            .map_err(|_| format!("Invalid sort column: {}", column))?;

        match direction.map(|d| d.trim().to_lowercase()).as_deref() {
            None | Some("desc") | Some("descending") => Ok(ColumnSort::desc(column)),
            Some("asc") | Some("ascending") => Ok(ColumnSort::asc(column)),
            Some(other) => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_descending() {
        let key = ColumnSort::default();
        assert_eq!(key.column, 0);
        assert!(!key.asc);
    }

    #[test]
    fn test_direction_builder() {
        assert_eq!(ColumnSort::desc(2).ascending(), ColumnSort::asc(2));
        assert_eq!(ColumnSort::asc(2).descending(), ColumnSort::desc(2));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ColumnSort::from_str("1").unwrap(), ColumnSort::desc(1));
        assert_eq!(ColumnSort::from_str("0:asc").unwrap(), ColumnSort::asc(0));
        assert_eq!(ColumnSort::from_str("3:DESC").unwrap(), ColumnSort::desc(3));
        assert!(ColumnSort::from_str("x").is_err());
        assert!(ColumnSort::from_str("1:sideways").is_err());
    }

    #[test]
    fn test_deserialize_defaults_to_descending() {
        let key: ColumnSort = serde_json::from_str(r#"{"column": 4}"#).unwrap();
        assert_eq!(key, ColumnSort::desc(4));
    }
}
