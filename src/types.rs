//! # Core Data Types
//!
//! Plain value types shared across the crate: local wall-clock components,
//! per-zone metadata records, and DST transition descriptions.
//!
//! All types here are immutable values with no identity beyond field equality.
//! They carry no logic other than trivial conversions; the algorithms that
//! produce and consume them live in [`crate::dst`], [`crate::convert`] and
//! [`crate::transitions`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A local wall-clock reading in some (implicit) timezone.
///
/// Every field is expected to be in range for a valid Gregorian calendar
/// date; use [`crate::validate::validate_time_parts`] before trusting a
/// value that crossed an API boundary.
///
/// # Example
/// ```
/// use zoned_time_lite::TimeParts;
///
/// let parts = TimeParts::new(2024, 7, 15, 13, 0, 0);
/// assert_eq!(parts.hour, 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeParts {
    /// Year (e.g. 2024).
    pub year: i32,
    /// Month (1–12).
    pub month: u32,
    /// Day of month (1–31, bounded by month and leap year).
    pub day: u32,
    /// Hour (0–23).
    pub hour: u32,
    /// Minute (0–59).
    pub minute: u32,
    /// Second (0–59).
    pub second: u32,
}

impl TimeParts {
    /// Creates a new `TimeParts` value without validating the fields.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self { year, month, day, hour, minute, second }
    }

    /// Interprets the components as a naive (zone-less) date-time.
    ///
    /// Returns `None` when the components do not form a real calendar
    /// date-time (e.g. February 30th).
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
    }

    /// The local calendar date only, as `(year, month, day)`.
    pub fn date(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }
}

/// Preferred short display tokens for a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAbbreviations {
    /// Standard-time abbreviation (e.g. `"GMT"`).
    pub standard: String,
    /// DST abbreviation (e.g. `"BST"`), if the zone observes DST.
    pub dst: Option<String>,
}

impl ZoneAbbreviations {
    /// Creates an abbreviation pair for a DST-observing zone.
    pub fn with_dst(standard: impl Into<String>, dst: impl Into<String>) -> Self {
        Self { standard: standard.into(), dst: Some(dst.into()) }
    }
}

/// Immutable metadata record for one timezone.
///
/// Offsets are minutes east of UTC and may be negative. `dst_offset` being
/// absent means the zone never observes DST. Actual transition rules are
/// always resolved through the platform timezone database, never from this
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMetadata {
    /// IANA timezone identifier (e.g. `"Europe/London"`).
    pub id: String,
    /// UTC offset in minutes during standard time.
    pub standard_offset: i32,
    /// UTC offset in minutes while DST is active, if the zone observes DST.
    pub dst_offset: Option<i32>,
    /// Preferred display abbreviations, if any are registered.
    pub abbreviations: Option<ZoneAbbreviations>,
    /// Template for numeric-offset display; `{offset}` is replaced with
    /// `±HH:MM` (e.g. `"GMT{offset}"` renders as `"GMT+09:00"`).
    pub fallback_format: String,
}

impl ZoneMetadata {
    /// Returns `true` when the zone observes DST at all.
    pub fn observes_dst(&self) -> bool {
        self.dst_offset.is_some()
    }
}

/// The pair of DST boundaries for one zone in one calendar year.
///
/// The fields are labeled by flip direction (off→on is a start, on→off is an
/// end), not re-ordered: for southern-hemisphere zones the end of the summer
/// period that began the previous year precedes that year's start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DstTransitions {
    /// UTC instant at which DST turns on.
    pub dst_start_utc: DateTime<Utc>,
    /// UTC instant at which DST turns off.
    pub dst_end_utc: DateTime<Utc>,
}

/// Whether a transition switches DST on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Clocks go forward; DST becomes active.
    Start,
    /// Clocks go back; standard time resumes.
    End,
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionKind::Start => f.write_str("start"),
            TransitionKind::End => f.write_str("end"),
        }
    }
}

/// The next DST boundary at or after some reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTransition {
    /// UTC instant of the transition.
    pub when_utc: DateTime<Utc>,
    /// Whether DST starts or ends at that instant.
    pub kind: TransitionKind,
    /// Calendar year the transition falls in.
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn to_naive_converts_valid_parts() {
        let parts = TimeParts::new(2024, 7, 15, 13, 30, 45);
        let naive = parts.to_naive().unwrap();

        assert_eq!(naive.year(), 2024);
        assert_eq!(naive.month(), 7);
        assert_eq!(naive.day(), 15);
        assert_eq!(naive.hour(), 13);
        assert_eq!(naive.minute(), 30);
        assert_eq!(naive.second(), 45);
    }

    #[test]
    fn to_naive_rejects_impossible_dates() {
        assert!(TimeParts::new(2024, 2, 30, 0, 0, 0).to_naive().is_none());
        assert!(TimeParts::new(2023, 2, 29, 0, 0, 0).to_naive().is_none());
        assert!(TimeParts::new(2024, 13, 1, 0, 0, 0).to_naive().is_none());
    }

    #[test]
    fn time_parts_equality_is_field_wise() {
        let a = TimeParts::new(2024, 7, 15, 13, 0, 0);
        let b = TimeParts::new(2024, 7, 15, 13, 0, 0);
        let c = TimeParts::new(2024, 7, 15, 13, 0, 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn transition_kind_displays_lowercase() {
        assert_eq!(TransitionKind::Start.to_string(), "start");
        assert_eq!(TransitionKind::End.to_string(), "end");
    }

    #[test]
    fn time_parts_serde_round_trip() {
        let parts = TimeParts::new(2024, 1, 5, 8, 5, 5);
        let json = serde_json::to_string(&parts).unwrap();
        let back: TimeParts = serde_json::from_str(&json).unwrap();

        assert_eq!(parts, back);
    }

    #[test]
    fn zone_metadata_observes_dst() {
        let meta = ZoneMetadata {
            id: "Asia/Tokyo".into(),
            standard_offset: 540,
            dst_offset: None,
            abbreviations: None,
            fallback_format: "GMT{offset}".into(),
        };
        assert!(!meta.observes_dst());
    }
}
