//! Deserializers for form-style payloads.
//!
//! Filter bars and event forms send empty strings for "unset", so blank
//! values become `None` before any parsing happens.

use chrono::{NaiveDate, NaiveTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::calendar::{parse_event_time, parse_iso_date};

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Optional string; blank is `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)
}

/// Optional `YYYY-MM-DD` date; blank is `None`.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)?
        .map(|value| parse_iso_date(value.trim()).map_err(D::Error::custom))
        .transpose()
}

/// Optional `HH:MM` or `HH:MM:SS` time; blank is `None`.
pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer)?
        .map(|value| parse_event_time(value.trim()).map_err(D::Error::custom))
        .transpose()
}

/// A field where "absent" and "cleared" differ.
///
/// Use with `#[serde(default)]`: a missing field stays `None`, `null` or a
/// blank string becomes `Some(None)`, and a value becomes `Some(Some(v))`.
pub fn deserialize_clearable_string<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    non_blank(deserializer).map(Some)
}
