//! Fixed `yyyy-MM-dd` date policy
//!
//! Dates on the wire are plain calendar days in UTC. They are parsed with a
//! locale-independent numeric format, so the result never depends on the host
//! environment.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// The one accepted wire format for date fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a wire date was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Not exactly four, two and two digits separated by `-`
    #[error("not in yyyy-MM-dd form")]
    Shape,

    /// Right shape, but not a calendar day
    #[error(transparent)]
    Calendar(#[from] chrono::ParseError),
}

/// Parse a wire date
///
/// Only the zero-padded `yyyy-MM-dd` form is accepted. chrono alone would also
/// take signs, surrounding whitespace, short years and single-digit fields.
pub fn parse(value: &str) -> Result<NaiveDate, DateError> {
    if !has_wire_shape(value) {
        return Err(DateError::Shape);
    }
    Ok(NaiveDate::parse_from_str(value, DATE_FORMAT)?)
}

fn has_wire_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Format a date for the wire
pub fn format(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde adapter for required date fields
pub mod required {
    use super::{Deserialize, Deserializer, NaiveDate, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(|e| {
            serde::de::Error::custom(format!("invalid date '{raw}', expected yyyy-MM-dd: {e}"))
        })
    }
}

/// Serde adapter for optional date fields; `null` and absence both map to `None`
pub mod optional {
    use super::{Deserialize, Deserializer, NaiveDate, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_some(&super::format(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw).map(Some).map_err(|e| {
                serde::de::Error::custom(format!("invalid date '{raw}', expected yyyy-MM-dd: {e}"))
            }),
            None => Ok(None),
        }
    }
}
