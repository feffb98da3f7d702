//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision and rendered as ISO8601 with Z suffix.
//!
//! ## Invariant
//!
//! Every timestamp in the persisted state is UTC with a Z suffix. Local
//! timezone offsets would make the same instant serialize differently across
//! machines, so non-UTC inputs are converted at construction.
//!
//! Parsing is lenient: the load path must recover whatever a previous
//! session wrote (including millisecond-precision timestamps from older
//! writers), so any RFC 3339 offset is accepted and normalized to UTC.
//!
//! The [`iso_string`] serde bridge handles the "empty string until first
//! mutation" convention of per-control `lastModified` fields: `None`
//! serializes as `""`, and `""` or an unparseable value deserializes as
//! `None`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClawcheckError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, any offset, normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// Accepts any timezone offset and converts to UTC; sub-second
    /// components are truncated. The result always renders with a Z suffix
    /// at seconds precision regardless of the input form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ClawcheckError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            ClawcheckError::Timestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Serde bridge for `Option<Timestamp>` fields that use the empty string as
/// their "never set" value on the wire.
///
/// Apply with `#[serde(with = "clawcheck_core::temporal::iso_string")]`.
/// `None ↔ ""`, `Some(ts) ↔ "2026-01-15T12:00:00Z"`. Unparseable stored
/// values deserialize as `None` — the load path degrades, it does not fail.
pub mod iso_string {
    use super::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `None` as the empty string, `Some` as ISO8601 with Z suffix.
    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_iso8601()),
            None => serializer.serialize_str(""),
        }
    }

    /// Deserialize the empty string (or garbage) as `None`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Ok(Timestamp::parse(&raw).ok())
    }
}

/// Serialize a `Timestamp` as its ISO8601 rendering rather than chrono's
/// default RFC 3339 output (which carries sub-second digits and `+00:00`
/// depending on construction). Used for the aggregate `lastUpdated` field.
///
/// Apply with `#[serde(with = "clawcheck_core::temporal::iso")]`.
pub mod iso {
    use super::Timestamp;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn serialize<S>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_iso8601())
    }

    /// Deserialize leniently; an unparseable stored value becomes "now".
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Timestamp::parse(&raw).unwrap_or_else(|_| Timestamp::now()))
    }
}
