//! Field values and the comparator used by local sorting

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::LazyLock;

use super::query::SortDirection;

/// A polymorphic field value read from a record
///
/// Records are opaque to the dashboard; the only thing the list core needs
/// from them is a comparable value per field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Convert a JSON scalar into a field value
    ///
    /// Arrays and objects have no meaningful ordering and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(FieldValue::String(s.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Integer)
                .or_else(|| n.as_f64().map(FieldValue::Float)),
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Null => Some(FieldValue::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float if it is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Interpret the value as a point in time, in milliseconds since the epoch
    ///
    /// Strings are parsed; integers are taken as epoch milliseconds.
    pub fn as_timestamp_millis(&self) -> Option<i64> {
        match self {
            FieldValue::DateTime(dt) => Some(dt.timestamp_millis()),
            FieldValue::String(s) => parse_timestamp_millis(s),
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Conversion used by `impl_record!` to expose struct fields
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        self.as_ref()
            .map(ToFieldValue::to_field_value)
            .unwrap_or(FieldValue::Null)
    }
}

/// Parse the timestamp formats the orchestrator and the mock data emit
///
/// Accepted: RFC 3339, `YYYY-MM-DD HH:MM:SS[.ffffff]+HH[:MM]` (Postgres text
/// output), naive date-times (read as UTC) and bare `YYYY-MM-DD` dates.
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "root collator unavailable, falling back to case-folded ordering");
            None
        }
    }
});

/// Locale-aware string ordering
///
/// Uses the CLDR root collation at tertiary strength: accents are secondary
/// differences, and on a case-only tie lowercase sorts first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a)),
    }
}

/// Compare two field values for sorting
///
/// Rules, in order:
/// 1. both strings: locale ordering
/// 2. both numbers: numeric ordering
/// 3. `date_like` field: timestamp ordering
/// 4. anything else: `Equal`, so a stable sort leaves the pair in place
///
/// The direction is applied to every rule that produces an ordering.
pub fn compare_values(
    a: Option<&FieldValue>,
    b: Option<&FieldValue>,
    direction: SortDirection,
    date_like: bool,
) -> Ordering {
    let (Some(a), Some(b)) = (a, b) else {
        return Ordering::Equal;
    };

    if let (Some(a), Some(b)) = (a.as_string(), b.as_string()) {
        return direction.apply(locale_compare(a, b));
    }

    if let (Some(a), Some(b)) = (a.as_number(), b.as_number()) {
        return direction.apply(a.partial_cmp(&b).unwrap_or(Ordering::Equal));
    }

    if date_like {
        if let (Some(a), Some(b)) = (a.as_timestamp_millis(), b.as_timestamp_millis()) {
            return direction.apply(a.cmp(&b));
        }
    }

    Ordering::Equal
}
