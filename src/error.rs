//! # Error Types
//!
//! A single typed error enum covering every failure the crate can surface.
//! Callers can pattern-match on the kind instead of parsing messages, and
//! every message names the offending value.
//!
//! All validation happens at the public-operation boundary before any core
//! algorithm runs; the core never substitutes a default for invalid input.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::types::TimeParts;

/// Result alias used throughout the crate.
pub type TimeResult<T> = Result<T, TimeError>;

/// All failure kinds surfaced by the crate.
///
/// # Example
/// ```
/// use zoned_time_lite::error::TimeError;
///
/// let err = TimeError::UnsupportedZone { zone: "Mars/Olympus_Mons".into() };
/// assert!(err.to_string().contains("Mars/Olympus_Mons"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The instant falls outside the supported range [1970, 2100].
    #[error("invalid instant {instant}: outside the supported range 1970-01-01 to 2100-12-31")]
    InvalidInstant {
        /// The rejected instant.
        instant: DateTime<Utc>,
    },

    /// A wall-clock component is out of calendar range. The `max` bound for
    /// the day field is leap-year aware.
    #[error("invalid {field}: {value}, must be between {min} and {max}")]
    InvalidTimeParts {
        /// Which component failed (`"year"`, `"month"`, `"day"`, ...).
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Lowest acceptable value.
        min: i64,
        /// Highest acceptable value.
        max: i64,
    },

    /// An empty or blank string was supplied as a zone identifier.
    #[error("invalid timezone identifier: empty string")]
    InvalidZoneIdentifier,

    /// A non-empty zone identifier the platform timezone database rejects.
    #[error("unsupported timezone: '{zone}' is not a recognized IANA identifier")]
    UnsupportedZone {
        /// The rejected identifier.
        zone: String,
    },

    /// A working-hours boundary string is not zero-padded 24-hour `HH:MM`.
    #[error("invalid {which} time '{value}': expected HH:MM format (00-23 hours, 00-59 minutes)")]
    InvalidTimeWindow {
        /// Which boundary failed (`"start"` or `"end"`).
        which: &'static str,
        /// The rejected string.
        value: String,
    },

    /// A working-day set with values outside 0–6, duplicates, or no entries.
    #[error("invalid working days: {detail}")]
    InvalidWorkingDaySet {
        /// What exactly is wrong with the set.
        detail: String,
    },

    /// The local→UTC search exhausted every fallback strategy.
    #[error("cannot resolve local time {parts:?} in {zone}: no matching UTC instant within the search window")]
    UnresolvableLocalTime {
        /// The zone the search ran against.
        zone: String,
        /// The local reading that could not be resolved.
        parts: TimeParts,
    },

    /// A transition-query year outside the supported range [1970, 2100].
    #[error("invalid year: {year}, must be between 1970 and 2100")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },
}
