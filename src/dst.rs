//! # DST Resolution
//!
//! Decides whether a UTC instant is in daylight-saving time for a zone.
//!
//! The decision is metadata-first: a zone with no DST offset short-circuits
//! to `false` without touching the platform at all. For DST-observing zones
//! the resolver prefers the platform's zone-name token and falls back to an
//! offset comparison when the token is absent or unrecognized, so a missing
//! platform enrichment degrades the method rather than failing the call.

use chrono::{DateTime, Utc};

use crate::error::TimeResult;
use crate::platform::PlatformCalendar;
use crate::types::ZoneMetadata;
use crate::validate::validate_instant;

/// Returns `true` when `instant` is in DST for the zone described by
/// `metadata`.
///
/// The resolver is agnostic to where the metadata came from (static
/// registry or runtime discovery).
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::dst::is_in_dst;
/// use zoned_time_lite::platform::TzDatabase;
/// use zoned_time_lite::registry::ZoneRegistry;
///
/// let registry = ZoneRegistry::builtin();
/// let london = registry.get("Europe/London").unwrap();
/// let calendar = TzDatabase::new();
///
/// let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
/// assert!(is_in_dst(london, &calendar, summer).unwrap());
///
/// let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
/// assert!(!is_in_dst(london, &calendar, winter).unwrap());
/// ```
pub fn is_in_dst<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    instant: DateTime<Utc>,
) -> TimeResult<bool> {
    validate_instant(instant)?;

    // Cheapest and most common case: the zone never observes DST.
    let Some(dst_offset) = metadata.dst_offset else {
        return Ok(false);
    };

    if let Some(abbrs) = &metadata.abbreviations {
        if let Some(token) = calendar.zone_token(instant, &metadata.id)? {
            if abbrs.dst.as_deref() == Some(token.as_str()) {
                return Ok(true);
            }
            if token == abbrs.standard {
                return Ok(false);
            }
            // Unrecognized token (e.g. a numeric offset); fall through.
        }
    }

    // Offset fallback: only the recorded DST offset counts as DST.
    let offset = calendar.utc_offset_minutes(instant, &metadata.id)?;
    Ok(offset == dst_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeError;
    use crate::platform::TzDatabase;
    use crate::registry::ZoneRegistry;
    use crate::types::{TimeParts, ZoneAbbreviations};
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    fn metadata(id: &str) -> ZoneMetadata {
        ZoneRegistry::builtin().get(id).cloned().unwrap()
    }

    #[test]
    fn london_summer_is_dst_winter_is_not() {
        let calendar = TzDatabase::new();
        let london = metadata("Europe/London");

        assert!(is_in_dst(&london, &calendar, utc(2024, 7, 15, 12)).unwrap());
        assert!(!is_in_dst(&london, &calendar, utc(2024, 1, 15, 12)).unwrap());
    }

    #[test]
    fn new_york_and_sydney_flip_with_their_seasons() {
        let calendar = TzDatabase::new();

        let new_york = metadata("America/New_York");
        assert!(is_in_dst(&new_york, &calendar, utc(2024, 7, 15, 12)).unwrap());
        assert!(!is_in_dst(&new_york, &calendar, utc(2024, 1, 15, 12)).unwrap());

        // Southern hemisphere: DST in January, standard time in July.
        let sydney = metadata("Australia/Sydney");
        assert!(is_in_dst(&sydney, &calendar, utc(2024, 1, 15, 12)).unwrap());
        assert!(!is_in_dst(&sydney, &calendar, utc(2024, 7, 15, 12)).unwrap());
    }

    #[test]
    fn zone_without_dst_offset_never_reports_dst() {
        let calendar = TzDatabase::new();
        let tokyo = metadata("Asia/Tokyo");

        for month in 1..=12 {
            assert!(!is_in_dst(&tokyo, &calendar, utc(2024, month, 15, 12)).unwrap());
        }
    }

    #[test]
    fn offset_fallback_when_no_abbreviations_registered() {
        let calendar = TzDatabase::new();
        // Real zone, fabricated metadata without abbreviations.
        let paris = ZoneMetadata {
            id: "Europe/Paris".into(),
            standard_offset: 60,
            dst_offset: Some(120),
            abbreviations: None,
            fallback_format: "GMT{offset}".into(),
        };

        assert!(is_in_dst(&paris, &calendar, utc(2024, 7, 15, 12)).unwrap());
        assert!(!is_in_dst(&paris, &calendar, utc(2024, 1, 15, 12)).unwrap());
    }

    #[test]
    fn offset_fallback_when_token_is_unrecognized() {
        let calendar = TzDatabase::new();
        // Abbreviations that will never match the platform token, forcing
        // the offset comparison path.
        let london = ZoneMetadata {
            id: "Europe/London".into(),
            standard_offset: 0,
            dst_offset: Some(60),
            abbreviations: Some(ZoneAbbreviations::with_dst("XXX", "YYY")),
            fallback_format: "GMT{offset}".into(),
        };

        assert!(is_in_dst(&london, &calendar, utc(2024, 7, 15, 12)).unwrap());
        assert!(!is_in_dst(&london, &calendar, utc(2024, 1, 15, 12)).unwrap());
    }

    #[test]
    fn unexpected_offset_defaults_to_not_in_dst() {
        // Scripted platform reporting an offset that matches neither the
        // standard nor the DST offset.
        struct OddOffset;
        impl PlatformCalendar for OddOffset {
            fn local_parts(&self, _: DateTime<Utc>, _: &str) -> TimeResult<TimeParts> {
                Ok(TimeParts::new(2024, 1, 1, 0, 0, 0))
            }
            fn zone_token(&self, _: DateTime<Utc>, _: &str) -> TimeResult<Option<String>> {
                Ok(None)
            }
            fn utc_offset_minutes(&self, _: DateTime<Utc>, _: &str) -> TimeResult<i32> {
                Ok(37)
            }
            fn validate_zone(&self, _: &str) -> TimeResult<()> {
                Ok(())
            }
        }

        let meta = ZoneMetadata {
            id: "Test/Zone".into(),
            standard_offset: 0,
            dst_offset: Some(60),
            abbreviations: None,
            fallback_format: "GMT{offset}".into(),
        };
        assert!(!is_in_dst(&meta, &OddOffset, utc(2024, 7, 15, 12)).unwrap());
    }

    #[test]
    fn out_of_range_instant_is_rejected() {
        let calendar = TzDatabase::new();
        let london = metadata("Europe/London");
        let got = is_in_dst(&london, &calendar, utc(2101, 1, 1, 0));

        assert!(matches!(got, Err(TimeError::InvalidInstant { .. })));
    }
}
