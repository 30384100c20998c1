//! Raw command field values and their typed parsers.
//!
//! # Responsibility
//! - Carry option values from the command surface as plain text.
//! - Convert text into integers, reals and timestamps at the entity boundary.
//!
//! # Invariants
//! - Timestamps accept exactly `YYYY-MM-DD HH:MM:SS`; surrounding whitespace
//!   is rejected unless the caller trims first.
//! - Integer and real parsing ignore surrounding whitespace.

use chrono::{NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Canonical textual form of every stored date-time column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable form of [`TIMESTAMP_FORMAT`] used in error messages.
pub const TIMESTAMP_PATTERN: &str = "YYYY-MM-DD HH:MM:SS";

/// Field-level input failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("missing value for --{field}")]
    Missing { field: &'static str },
    #[error("invalid value `{value}` for --{field}: {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl FieldError {
    /// Option name the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => field,
        }
    }

    fn invalid(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Option name to text map resolved for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one option value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`FieldValues::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a required text value unchanged.
    pub fn text(&self, field: &'static str) -> Result<String, FieldError> {
        self.get(field)
            .map(str::to_string)
            .ok_or(FieldError::Missing { field })
    }

    /// Returns a text value, falling back to `default` when absent.
    pub fn text_or(&self, field: &str, default: &str) -> String {
        self.get(field).unwrap_or(default).to_string()
    }

    pub fn integer(&self, field: &'static str) -> Result<i64, FieldError> {
        parse_integer(field, &self.text(field)?)
    }

    pub fn real(&self, field: &'static str) -> Result<f64, FieldError> {
        parse_real(field, &self.text(field)?)
    }

    /// Parses a strict `YYYY-MM-DD HH:MM:SS` timestamp.
    pub fn timestamp(&self, field: &'static str) -> Result<NaiveDateTime, FieldError> {
        parse_timestamp(field, &self.text(field)?)
    }

    /// Trims surrounding whitespace before parsing the timestamp.
    pub fn trimmed_timestamp(&self, field: &'static str) -> Result<NaiveDateTime, FieldError> {
        parse_timestamp(field, self.text(field)?.trim())
    }
}

impl<K, V> FromIterator<(K, V)> for FieldValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// Parses a base-10 integer, ignoring surrounding whitespace.
pub fn parse_integer(field: &'static str, raw: &str) -> Result<i64, FieldError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| FieldError::invalid(field, raw, "not a valid integer"))
}

/// Parses a floating-point number, ignoring surrounding whitespace.
pub fn parse_real(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FieldError::invalid(field, raw, "not a valid number"))
}

/// Parses `raw` against [`TIMESTAMP_FORMAT`] with no whitespace tolerance.
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<NaiveDateTime, FieldError> {
    let reason = || format!("invalid date format, please use {TIMESTAMP_PATTERN}");
    // chrono tolerates whitespace around numeric items and inside separators.
    if !has_timestamp_shape(raw) {
        return Err(FieldError::invalid(field, raw, reason()));
    }
    let parsed = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|_| FieldError::invalid(field, raw, reason()))?;
    // `%S` accepts a leap second `60`.
    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(FieldError::invalid(field, raw, reason()));
    }
    Ok(parsed)
}

/// Checks the fixed `dddd-dd-dd dd:dd:dd` layout byte by byte.
fn has_timestamp_shape(raw: &str) -> bool {
    const SHAPE: &[u8] = b"dddd-dd-dd dd:dd:dd";
    raw.len() == SHAPE.len()
        && raw
            .bytes()
            .zip(SHAPE)
            .all(|(byte, &slot)| match slot {
                b'd' => byte.is_ascii_digit(),
                separator => byte == separator,
            })
}

/// Renders a timestamp in the stored column format.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
