//! Production [`PlatformCalendar`] adapter over the `chrono-tz` compiled-in
//! IANA timezone database.
//!
//! The adapter is stateless; every call is a fast in-process computation
//! against the database shipped with `chrono-tz`.

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike, Utc};
use chrono_tz::{OffsetName, Tz};

use crate::error::{TimeError, TimeResult};
use crate::platform::PlatformCalendar;
use crate::types::TimeParts;

/// [`PlatformCalendar`] backed by `chrono-tz`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::platform::{PlatformCalendar, TzDatabase};
///
/// let calendar = TzDatabase::new();
/// let noon = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
/// let parts = calendar.local_parts(noon, "Asia/Tokyo").unwrap();
/// assert_eq!((parts.hour, parts.day), (21, 15));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl TzDatabase {
    /// Creates the adapter.
    pub fn new() -> Self {
        Self
    }

    fn parse_zone(&self, zone: &str) -> TimeResult<Tz> {
        if zone.trim().is_empty() {
            return Err(TimeError::InvalidZoneIdentifier);
        }
        zone.parse::<Tz>()
            .map_err(|_| TimeError::UnsupportedZone { zone: zone.to_string() })
    }
}

impl PlatformCalendar for TzDatabase {
    fn local_parts(&self, instant: DateTime<Utc>, zone: &str) -> TimeResult<TimeParts> {
        let tz = self.parse_zone(zone)?;
        let local = instant.with_timezone(&tz);
        Ok(TimeParts {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: local.second(),
        })
    }

    fn zone_token(&self, instant: DateTime<Utc>, zone: &str) -> TimeResult<Option<String>> {
        let tz = self.parse_zone(zone)?;
        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        Ok(offset.abbreviation().map(str::to_string))
    }

    fn utc_offset_minutes(&self, instant: DateTime<Utc>, zone: &str) -> TimeResult<i32> {
        let tz = self.parse_zone(zone)?;
        let offset = tz.offset_from_utc_datetime(&instant.naive_utc());
        Ok(offset.fix().local_minus_utc() / 60)
    }

    fn validate_zone(&self, zone: &str) -> TimeResult<()> {
        self.parse_zone(zone).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn local_parts_for_london_summer_and_winter() {
        let calendar = TzDatabase::new();

        let summer = calendar
            .local_parts(utc(2024, 7, 15, 12, 0, 0), "Europe/London")
            .unwrap();
        assert_eq!(summer, TimeParts::new(2024, 7, 15, 13, 0, 0));

        let winter = calendar
            .local_parts(utc(2024, 1, 15, 12, 0, 0), "Europe/London")
            .unwrap();
        assert_eq!(winter, TimeParts::new(2024, 1, 15, 12, 0, 0));
    }

    #[test]
    fn local_parts_cross_the_date_line_correctly() {
        let calendar = TzDatabase::new();
        let late = calendar
            .local_parts(utc(2024, 7, 15, 23, 30, 0), "Asia/Tokyo")
            .unwrap();
        assert_eq!(late, TimeParts::new(2024, 7, 16, 8, 30, 0));
    }

    #[test]
    fn zone_token_reports_abbreviations() {
        let calendar = TzDatabase::new();

        let summer = calendar
            .zone_token(utc(2024, 7, 15, 12, 0, 0), "Europe/London")
            .unwrap();
        assert_eq!(summer.as_deref(), Some("BST"));

        let winter = calendar
            .zone_token(utc(2024, 1, 15, 12, 0, 0), "Europe/London")
            .unwrap();
        assert_eq!(winter.as_deref(), Some("GMT"));
    }

    #[test]
    fn utc_offset_tracks_dst() {
        let calendar = TzDatabase::new();

        let summer = calendar
            .utc_offset_minutes(utc(2024, 7, 15, 12, 0, 0), "America/New_York")
            .unwrap();
        assert_eq!(summer, -240);

        let winter = calendar
            .utc_offset_minutes(utc(2024, 1, 15, 12, 0, 0), "America/New_York")
            .unwrap();
        assert_eq!(winter, -300);
    }

    #[test]
    fn blank_zone_is_invalid_identifier() {
        let calendar = TzDatabase::new();
        let got = calendar.validate_zone("   ");
        assert_eq!(got, Err(TimeError::InvalidZoneIdentifier));
    }

    #[test]
    fn unknown_zone_is_unsupported() {
        let calendar = TzDatabase::new();
        let got = calendar.validate_zone("Not/AZone");
        assert_eq!(got, Err(TimeError::UnsupportedZone { zone: "Not/AZone".into() }));
    }
}
