//! Display formatting for dates, byte sizes, and model names.
//!
//! DESIGN
//! ======
//! Month names and size units come from [`DisplayConfig`] so deployments can
//! localize labels without touching call sites. The free functions use the
//! English defaults.
//!
//! Malformed dates are an explicit [`FormatError::InvalidDate`]; views that
//! prefer a placeholder call [`format_date_or_invalid`]. Byte sizes never fail:
//! the default unit table reaches exabytes, which covers every `u64`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::Deserialize;

/// Placeholder rendered by [`format_date_or_invalid`] for unparseable input.
pub const INVALID_DATE: &str = "Invalid Date";

/// One kibibyte.
pub const KIB: u64 = 1024;
/// One gibibyte; sizes at or above this render with two decimals.
pub const GIB: u64 = 1_073_741_824;

pub const DEFAULT_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DEFAULT_SIZE_UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

const NAIVE_DATETIME_PATTERNS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_DATETIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

static DEFAULT_CONFIG: LazyLock<DisplayConfig> = LazyLock::new(DisplayConfig::default);

/// Error returned by fallible formatting and config loading.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input could not be parsed as a date/time.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    /// The config parsed but its tables are unusable.
    #[error("invalid display config: {0}")]
    InvalidConfig(String),
    /// The config JSON could not be decoded.
    #[error("failed to parse display config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Granularity at which a date is rendered, coarsest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateResolution {
    /// Month and year.
    #[default]
    Month = 0,
    /// Adds the day of month.
    Day = 1,
    /// Adds hour and minute.
    Minute = 2,
    /// Adds seconds.
    Second = 3,
}

impl DateResolution {
    /// Map a numeric level to a resolution. Levels above 3 clamp to `Second`.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Self::Month,
            1 => Self::Day,
            2 => Self::Minute,
            _ => Self::Second,
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Label tables used when rendering dates and sizes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub months: [String; 12],
    pub size_units: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            months: DEFAULT_MONTHS.map(str::to_owned),
            size_units: DEFAULT_SIZE_UNITS.iter().map(|unit| (*unit).to_owned()).collect(),
        }
    }
}

impl DisplayConfig {
    /// Load a config from JSON. Missing keys take the English defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::ConfigParse`] for malformed JSON or a month table
    /// that is not exactly 12 entries, and [`FormatError::InvalidConfig`] for an
    /// empty unit table.
    pub fn from_json(raw: &str) -> Result<Self, FormatError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.size_units.is_empty() {
            return Err(FormatError::InvalidConfig("size_units must not be empty".into()));
        }
        Ok(config)
    }

    /// Format `raw` at `resolution` using this config's month names.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidDate`] when `raw` is not a recognizable
    /// date or date/time.
    pub fn format_date(&self, raw: &str, resolution: DateResolution) -> Result<String, FormatError> {
        let ts = parse_timestamp(raw)
            .or_else(|| parse_partial_date(raw))
            .ok_or_else(|| FormatError::InvalidDate(raw.to_owned()))?;
        Ok(self.render_date(ts, resolution))
    }

    /// Format a byte count using this config's unit table.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn format_size(&self, bytes: u64) -> String {
        let precision = if bytes < KIB {
            0
        } else if bytes >= GIB {
            2
        } else {
            1
        };

        let mut value = bytes as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit + 1 < self.size_units.len() {
            value /= 1024.0;
            unit += 1;
        }

        let suffix = self.size_units.get(unit).map_or("", String::as_str);
        format!("{value:.precision$} {suffix}")
    }

    fn render_date(&self, ts: NaiveDateTime, resolution: DateResolution) -> String {
        let mut out = self.months[ts.month0() as usize].clone();
        if resolution >= DateResolution::Day {
            out.push_str(&format!(" {},", ts.day()));
        }
        out.push_str(&format!(" {}", ts.year()));
        if resolution >= DateResolution::Minute {
            out.push_str(&format!(" at {}:{:02}", ts.hour(), ts.minute()));
        }
        if resolution >= DateResolution::Second {
            out.push_str(&format!(":{:02}", ts.second()));
        }
        out
    }
}

/// Parse a lenient ISO-style date or timestamp with at least a full date.
///
/// A single space may stand in for the `T` separator. Timestamps carrying an
/// offset are normalized to UTC; naive ones are kept as written.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let normalized = raw.trim().replacen(' ', "T", 1);

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_str(&normalized, OFFSET_DATETIME_PATTERN) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    for pattern in NAIVE_DATETIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse a year-month (`2014-01`) or bare year (`2014`) as the first instant
/// of that period.
fn parse_partial_date(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    let (year, month) = match trimmed.split_once('-') {
        Some((year, month)) => (year, month),
        None => (trimmed, "01"),
    };
    let all_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(year, 4) || !all_digits(month, 2) {
        return None;
    }
    let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) else {
        return None;
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

/// Format a date string with the default English month names.
///
/// # Errors
///
/// Returns [`FormatError::InvalidDate`] for unparseable input.
pub fn format_date(raw: &str, resolution: DateResolution) -> Result<String, FormatError> {
    DEFAULT_CONFIG.format_date(raw, resolution)
}

/// Format a date string, rendering [`INVALID_DATE`] instead of failing.
pub fn format_date_or_invalid(raw: &str, resolution: DateResolution) -> String {
    format_date(raw, resolution).unwrap_or_else(|err| {
        log::warn!("{err}; rendering placeholder");
        INVALID_DATE.to_owned()
    })
}

/// Format a byte count with the default unit table, e.g. `1.5 MB`.
pub fn format_size(bytes: u64) -> String {
    DEFAULT_CONFIG.format_size(bytes)
}

/// Model type name for a collection name: `user` becomes `UserModel`.
pub fn model_class_name(collection: &str) -> String {
    let mut chars = collection.chars();
    let mut out = String::with_capacity(collection.len() + "Model".len());
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out.push_str("Model");
    out
}
