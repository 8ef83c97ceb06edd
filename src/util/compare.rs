//! Comparators for sorting model collections and plain values.
//!
//! DESIGN
//! ======
//! Field values are lifted into [`SortValue`] so the comparison capability is
//! decided by type: text goes through [`collate`], numbers, booleans and
//! timestamps use their natural ordering, and mismatched types order by a
//! fixed type rank. Every comparator here is a total order, so slices sort
//! deterministically even when records carry mixed or missing fields.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use std::cmp::Ordering;

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::util::format::parse_timestamp;

/// Sort direction applied on top of a natural ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    /// Interpret a `±1` direction multiplier. Negative values mean descending.
    #[must_use]
    pub fn from_sign(sign: i8) -> Self {
        if sign < 0 { Self::Desc } else { Self::Asc }
    }

    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A field value that knows how to compare itself.
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Bool(bool),
    Number(f64),
    DateTime(NaiveDateTime),
    Text(String),
}

impl SortValue {
    /// Lift a JSON attribute. `null`, arrays and objects have no sort value.
    ///
    /// Strings holding an ISO date or timestamp become `DateTime` (offsets
    /// normalized to UTC) so they order chronologically; other strings are text.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => n.as_f64().map(Self::Number),
            Value::String(s) => Some(parse_timestamp(s).map_or_else(|| Self::Text(s.clone()), Self::DateTime)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Compare two values: text collates, same-typed scalars use their
    /// natural order, mixed types order by rank.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => collate(a, b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::DateTime(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for SortValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDateTime> for SortValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

/// Records that expose named fields for sorting.
pub trait Sortable {
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

impl Sortable for Map<String, Value> {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        self.get(field).and_then(SortValue::from_json)
    }
}

impl Sortable for Value {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match self {
            Value::Object(map) => map.sort_value(field),
            _ => None,
        }
    }
}

/// Locale-style text ordering.
///
/// Strings compare by their base letters first: decomposed, with combining
/// marks dropped and case folded, so `é` sorts with `e` and `Z` with `z`.
/// Ties are broken by accents, then by case (lower case first at the first
/// position where casing differs), then by raw code points.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let base = |s: &str| {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect::<Vec<_>>()
    };
    let accented = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<Vec<_>>();
    let case_key = |s: &str| s.chars().map(|c| !c.is_lowercase()).collect::<Vec<_>>();

    base(a)
        .cmp(&base(b))
        .then_with(|| accented(a).cmp(&accented(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

/// Order optional values; a missing value sorts before any present one.
#[must_use]
pub fn compare_optional(a: Option<&SortValue>, b: Option<&SortValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Two-argument comparator for sorting plain values.
#[must_use]
pub fn locale_sort(a: &SortValue, b: &SortValue) -> Ordering {
    a.compare(b)
}

/// [`locale_sort`] for string slices, e.g. `names.sort_by(|a, b| locale_sort_str(a, b))`.
#[must_use]
pub fn locale_sort_str(a: &str, b: &str) -> Ordering {
    collate(a, b)
}

/// Sort configuration for a model collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionSort {
    pub sort_field: String,
    pub secondary_sort_field: Option<String>,
    pub sort_dir: SortDir,
}

impl CollectionSort {
    pub fn new(sort_field: impl Into<String>) -> Self {
        Self { sort_field: sort_field.into(), secondary_sort_field: None, sort_dir: SortDir::Asc }
    }

    #[must_use]
    pub fn with_secondary(mut self, field: impl Into<String>) -> Self {
        self.secondary_sort_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_dir(mut self, sort_dir: SortDir) -> Self {
        self.sort_dir = sort_dir;
        self
    }

    /// Compare two records by the primary field, falling back to the
    /// secondary field only when the primary values tie.
    pub fn compare<T: Sortable + ?Sized>(&self, record1: &T, record2: &T) -> Ordering {
        let primary = self.compare_field(&self.sort_field, record1, record2);
        match (&self.secondary_sort_field, primary) {
            (Some(secondary), Ordering::Equal) => self.compare_field(secondary, record1, record2),
            _ => primary,
        }
    }

    /// Stable-sort `records` in place.
    pub fn sort<T: Sortable>(&self, records: &mut [T]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    fn compare_field<T: Sortable + ?Sized>(&self, field: &str, record1: &T, record2: &T) -> Ordering {
        let a = record1.sort_value(field);
        let b = record2.sort_value(field);
        self.sort_dir.apply(compare_optional(a.as_ref(), b.as_ref()))
    }
}

/// One-off record comparison without building a [`CollectionSort`].
pub fn locale_compare<T: Sortable + ?Sized>(
    record1: &T,
    record2: &T,
    sort_field: &str,
    secondary_sort_field: Option<&str>,
    sort_dir: SortDir,
) -> Ordering {
    let sort = CollectionSort {
        sort_field: sort_field.to_owned(),
        secondary_sort_field: secondary_sort_field.map(str::to_owned),
        sort_dir,
    };
    sort.compare(record1, record2)
}
