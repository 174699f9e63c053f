//! Cell values: what a table cell holds, how it displays and how it sorts.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single displayable, comparable table cell.
///
/// Values fall into comparison families: numbers (`Int`, `Float`, `Bytes`),
/// text (`String`, `Strings`, `Error`), booleans and timestamps. `Suffix`
/// sorts like the value it wraps, and `None` sorts as the zero of whatever it
/// is compared against (0, `""`, `false`, the earliest time).
///
/// Serialized untagged, so a JSON document can use plain scalars:
/// `null`, `true`, `42`, `1.5`, `"text"`, `["line 1", "line 2"]`, plus the
/// object forms `{"bytes": 1024}`, `{"time": "2024-01-02T03:04:05Z"}`,
/// `{"value": 3, "suffix": "*"}` and `{"error": "boom"}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value, rendered as `-`
    #[default]
    None,
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Plain text; embedded newlines make a multi-line cell
    String(String),
    /// A list of lines rendered as one multi-line cell
    Strings(Vec<String>),
    /// Byte count, rendered as a human-readable IEC size
    Bytes { bytes: u64 },
    /// Point in time, rendered in UTC
    Time { time: DateTime<Utc> },
    /// A value followed by a marker (e.g. `"v1*"` for a current version)
    Suffix { value: Box<Value>, suffix: String },
    /// An error message shown in place of a value
    Error { error: String },
}

impl Value {
    /// Create a text value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a multi-line value from individual lines
    pub fn strings<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Strings(lines.into_iter().map(Into::into).collect())
    }

    /// Create a byte-size value
    pub fn bytes(bytes: u64) -> Self {
        Value::Bytes { bytes }
    }

    /// Create a timestamp value
    pub fn time(time: DateTime<Utc>) -> Self {
        Value::Time { time }
    }

    /// Wrap a value with a trailing marker
    pub fn suffix(value: impl Into<Value>, suffix: impl Into<String>) -> Self {
        Value::Suffix {
            value: Box::new(value.into()),
            suffix: suffix.into(),
        }
    }

    /// Create an error cell from anything displayable
    pub fn error(error: impl fmt::Display) -> Self {
        Value::Error {
            error: error.to_string(),
        }
    }

    /// Whether this value displays as an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::None => true,
            Value::String(s) => s.is_empty(),
            Value::Strings(lines) => lines.iter().all(|l| l.is_empty()) && lines.len() <= 1,
            Value::Suffix { value, .. } => value.is_empty(),
            Value::Error { error } => error.is_empty(),
            Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Bytes { .. }
            | Value::Time { .. } => false,
        }
    }

    /// Order two values.
    ///
    /// Values of the same family compare naturally: numbers numerically (an
    /// `Int` against a `Float` compares as floats), text byte-wise, `false`
    /// before `true`, times chronologically. Across families the display
    /// strings are compared, which is total but not meaningful.
    pub fn compare(&self, other: &Value) -> Ordering {
        compare_keys(&self.sort_key(), &other.sort_key())
            .unwrap_or_else(|| self.to_string().as_bytes().cmp(other.to_string().as_bytes()))
    }

    fn sort_key(&self) -> SortKey<'_> {
        match self {
            Value::None => SortKey::Absent,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Int(i) => SortKey::Int(i128::from(*i)),
            Value::Float(f) => SortKey::Float(*f),
            Value::Bytes { bytes } => SortKey::Int(i128::from(*bytes)),
            Value::String(s) => SortKey::Text(Cow::Borrowed(s)),
            Value::Strings(lines) => SortKey::Text(Cow::Owned(lines.join("\n"))),
            Value::Time { time } => SortKey::Time(*time),
            Value::Suffix { value, .. } => value.sort_key(),
            Value::Error { error } => SortKey::Text(Cow::Borrowed(error)),
        }
    }
}

/// Comparison projection of a [`Value`].
#[derive(Debug)]
enum SortKey<'a> {
    Absent,
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(Cow<'a, str>),
    Time(DateTime<Utc>),
}

impl SortKey<'_> {
    /// The value an absent cell stands for when compared against `self`.
    fn zero(&self) -> SortKey<'static> {
        match self {
            SortKey::Absent => SortKey::Absent,
            SortKey::Bool(_) => SortKey::Bool(false),
            SortKey::Int(_) => SortKey::Int(0),
            SortKey::Float(_) => SortKey::Float(0.0),
            SortKey::Text(_) => SortKey::Text(Cow::Borrowed("")),
            SortKey::Time(_) => SortKey::Time(DateTime::<Utc>::MIN_UTC),
        }
    }
}

/// Returns `None` when the keys belong to different families.
fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Option<Ordering> {
    let ordering = match (a, b) {
        (SortKey::Absent, SortKey::Absent) => Ordering::Equal,
        (SortKey::Absent, other) => return compare_keys(&other.zero(), other),
        (other, SortKey::Absent) => return compare_keys(other, &other.zero()),
        (SortKey::Bool(x), SortKey::Bool(y)) => x.cmp(y),
        (SortKey::Int(x), SortKey::Int(y)) => x.cmp(y),
        (SortKey::Int(x), SortKey::Float(y)) => (*x as f64).total_cmp(y),
        (SortKey::Float(x), SortKey::Int(y)) => x.total_cmp(&(*y as f64)),
        (SortKey::Float(x), SortKey::Float(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.as_bytes().cmp(y.as_bytes()),
        (SortKey::Time(x), SortKey::Time(y)) => x.cmp(y),
        _ => return None,
    };
    Some(ordering)
}

/// Format a byte count with IEC units: one decimal below 10, none above.
fn human_bytes(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if size < 10.0 {
        format!("{:.1} {}", size, UNITS[unit])
    } else {
        format!("{:.0} {}", size, UNITS[unit])
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::Strings(lines) => f.write_str(&lines.join("\n")),
            Value::Bytes { bytes } => f.write_str(&human_bytes(*bytes)),
            Value::Time { time } => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S UTC")),
            Value::Suffix { value, suffix } => {
                if value.is_empty() {
                    Ok(())
                } else {
                    write!(f, "{}{}", value, suffix)
                }
            }
            Value::Error { error } => f.write_str(error),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(time: DateTime<Utc>) -> Self {
        Value::Time { time }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::None.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-12).to_string(), "-12");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::string("abc").to_string(), "abc");
    }

    #[test]
    fn test_display_strings_joins_lines() {
        let value = Value::strings(["one", "two"]);
        assert_eq!(value.to_string(), "one\ntwo");
    }

    #[test]
    fn test_display_bytes() {
        assert_eq!(Value::bytes(0).to_string(), "0 B");
        assert_eq!(Value::bytes(1023).to_string(), "1023 B");
        assert_eq!(Value::bytes(1536).to_string(), "1.5 KiB");
        assert_eq!(Value::bytes(15 * 1024 * 1024).to_string(), "15 MiB");
        assert_eq!(Value::bytes(3 * 1024 * 1024 * 1024).to_string(), "3.0 GiB");
    }

    #[test]
    fn test_display_time() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(Value::time(time).to_string(), "2024-01-02 03:04:05 UTC");
    }

    #[test]
    fn test_display_suffix() {
        assert_eq!(Value::suffix("v1", "*").to_string(), "v1*");
        assert_eq!(Value::suffix(Value::None, "*").to_string(), "");
        assert!(Value::suffix("", "*").is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::None.is_empty());
        assert!(Value::string("").is_empty());
        assert!(Value::Strings(vec![]).is_empty());
        assert!(!Value::strings(["", ""]).is_empty());
        assert!(!Value::Int(0).is_empty());
        assert!(!Value::Bool(false).is_empty());
    }

    #[test]
    fn test_compare_numbers() {
        assert_eq!(Value::Int(-1).compare(&Value::Int(20)), Ordering::Less);
        assert_eq!(Value::Int(100).compare(&Value::Int(20)), Ordering::Greater);
        assert_eq!(Value::Int(2).compare(&Value::Float(2.5)), Ordering::Less);
        assert_eq!(Value::bytes(2048).compare(&Value::bytes(1024)), Ordering::Greater);
    }

    #[test]
    fn test_compare_text_is_bytewise() {
        assert_eq!(Value::string("B").compare(&Value::string("a")), Ordering::Less);
        assert_eq!(Value::string("a").compare(&Value::string("a")), Ordering::Equal);
        assert_eq!(Value::string("ab").compare(&Value::string("a")), Ordering::Greater);
    }

    #[test]
    fn test_compare_none_as_zero() {
        assert_eq!(Value::None.compare(&Value::Int(0)), Ordering::Equal);
        assert_eq!(Value::None.compare(&Value::Int(5)), Ordering::Less);
        assert_eq!(Value::Int(-5).compare(&Value::None), Ordering::Less);
        assert_eq!(Value::None.compare(&Value::string("")), Ordering::Equal);
        assert_eq!(Value::None.compare(&Value::Bool(true)), Ordering::Less);
        assert_eq!(Value::None.compare(&Value::None), Ordering::Equal);
    }

    #[test]
    fn test_compare_suffix_uses_inner_value() {
        let small = Value::suffix(2, "*");
        assert_eq!(small.compare(&Value::Int(10)), Ordering::Less);
    }

    #[test]
    fn test_compare_times() {
        let early = Value::time(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let late = Value::time(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(early.compare(&late), Ordering::Less);
        assert_eq!(Value::None.compare(&early), Ordering::Less);
    }

    #[test]
    fn test_compare_across_families_uses_display() {
        assert_eq!(Value::Int(5).compare(&Value::string("a")), Ordering::Less);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_eq!(Value::from(3), Value::Int(3));
        assert_eq!(Value::from(Some(4_i64)), Value::Int(4));
        assert_eq!(Value::from(None::<i64>), Value::None);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<Value> = serde_json::from_str(
            r#"[null, true, 7, 1.5, "s", ["a", "b"], {"bytes": 10},
                {"value": 1, "suffix": "*"}, {"error": "boom"},
                {"time": "2024-01-02T03:04:05Z"}]"#,
        )
        .unwrap();

        assert_eq!(values[0], Value::None);
        assert_eq!(values[1], Value::Bool(true));
        assert_eq!(values[2], Value::Int(7));
        assert_eq!(values[3], Value::Float(1.5));
        assert_eq!(values[4], Value::string("s"));
        assert_eq!(values[5], Value::strings(["a", "b"]));
        assert_eq!(values[6], Value::bytes(10));
        assert_eq!(values[7], Value::suffix(1, "*"));
        assert_eq!(values[8], Value::error("boom"));
        assert_eq!(values[9].to_string(), "2024-01-02 03:04:05 UTC");
    }
}
