//! # Local ⇄ UTC Conversion
//!
//! UTC→local is a direct platform delegation: every UTC instant maps to
//! exactly one local reading.
//!
//! Local→UTC is the hard direction. Near DST transitions a wall-clock
//! reading is not globally unique: fall-back creates two UTC instants with
//! the same local reading, and spring-forward creates readings that never
//! occur at all. Instead of re-deriving transition rules, the converter
//! searches outward from a standard-offset guess and lets the platform
//! confirm each candidate by round-tripping it back to local components.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::debug;

use crate::error::{TimeError, TimeResult};
use crate::platform::PlatformCalendar;
use crate::types::{TimeParts, ZoneMetadata};
use crate::validate::{validate_instant, validate_time_parts};

/// How far the local→UTC search walks from the initial guess, in minutes.
/// Covers every real-world DST shift (at most 2 hours) with margin.
const SEARCH_WINDOW_MINUTES: i64 = 180;

/// Converts a UTC instant to the local wall-clock components in `zone`.
///
/// Deterministic and total for any instant in the supported range and any
/// platform-recognized zone.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::convert::to_local_parts;
/// use zoned_time_lite::platform::TzDatabase;
/// use zoned_time_lite::TimeParts;
///
/// let calendar = TzDatabase::new();
/// let noon = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
/// let parts = to_local_parts(&calendar, noon, "America/New_York").unwrap();
/// assert_eq!(parts, TimeParts::new(2024, 7, 15, 8, 0, 0));
/// ```
pub fn to_local_parts<C: PlatformCalendar>(
    calendar: &C,
    instant: DateTime<Utc>,
    zone: &str,
) -> TimeResult<TimeParts> {
    validate_instant(instant)?;
    calendar.local_parts(instant, zone)
}

/// Resolves a local wall-clock reading in the zone described by `metadata`
/// to a UTC instant.
///
/// The initial guess interprets `parts` as UTC and subtracts the zone's
/// *standard* offset. From there the search expands in 1-minute steps
/// (guess, +1, −1, +2, −2, … up to ±180), returning the first candidate
/// whose local reading reproduces `parts` exactly. With this order a
/// fall-back ambiguous reading resolves to the occurrence the guess lands
/// on, which is the standard-time occurrence.
///
/// Readings inside a spring-forward gap have no exact match; a coarser
/// hour-stepped pass over the same window then accepts the first candidate
/// whose local calendar date matches, i.e. the nearest representable time
/// on the same day.
///
/// # Errors
/// - [`TimeError::InvalidTimeParts`] for out-of-range components
/// - [`TimeError::UnresolvableLocalTime`] when both passes come up empty
pub fn from_local_parts<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    parts: TimeParts,
) -> TimeResult<DateTime<Utc>> {
    validate_time_parts(&parts)?;

    let naive = parts.to_naive().ok_or(TimeError::InvalidTimeParts {
        field: "day",
        value: parts.day as i64,
        min: 1,
        max: crate::validate::days_in_month(parts.year, parts.month) as i64,
    })?;
    let guess = Utc.from_utc_datetime(&naive) - Duration::minutes(metadata.standard_offset as i64);

    // Exact pass: expanding 1-minute steps, later candidate first.
    for candidate in expanding_candidates(guess, 1) {
        if calendar.local_parts(candidate, &metadata.id)? == parts {
            return Ok(candidate);
        }
    }

    // Gap fallback: hour steps, accept any instant on the same local date.
    for candidate in expanding_candidates(guess, 60) {
        let local = calendar.local_parts(candidate, &metadata.id)?;
        if local.date() == parts.date() {
            debug!(
                zone = %metadata.id,
                requested = ?parts,
                resolved = ?local,
                "local reading falls in a spring-forward gap, rolled to same-day time"
            );
            return Ok(candidate);
        }
    }

    Err(TimeError::UnresolvableLocalTime { zone: metadata.id.clone(), parts })
}

/// Candidates at `guess`, `guess + step`, `guess - step`, `guess + 2*step`,
/// … out to the ±180-minute window.
fn expanding_candidates(
    guess: DateTime<Utc>,
    step_minutes: i64,
) -> impl Iterator<Item = DateTime<Utc>> {
    let steps = SEARCH_WINDOW_MINUTES / step_minutes;
    std::iter::once(guess).chain((1..=steps).flat_map(move |n| {
        let delta = Duration::minutes(n * step_minutes);
        [guess + delta, guess - delta]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::TzDatabase;
    use crate::registry::ZoneRegistry;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn metadata(id: &str) -> ZoneMetadata {
        ZoneRegistry::builtin().get(id).cloned().unwrap()
    }

    #[test]
    fn utc_to_local_boundary_scenarios() {
        let calendar = TzDatabase::new();
        let noon = utc(2024, 7, 15, 12, 0, 0);

        assert_eq!(
            to_local_parts(&calendar, noon, "America/New_York").unwrap(),
            TimeParts::new(2024, 7, 15, 8, 0, 0)
        );
        assert_eq!(
            to_local_parts(&calendar, noon, "Europe/London").unwrap(),
            TimeParts::new(2024, 7, 15, 13, 0, 0)
        );
        assert_eq!(
            to_local_parts(&calendar, noon, "Asia/Tokyo").unwrap(),
            TimeParts::new(2024, 7, 15, 21, 0, 0)
        );
    }

    #[test]
    fn round_trip_away_from_transitions() {
        let calendar = TzDatabase::new();
        let registry = ZoneRegistry::builtin();

        for zone in registry.zone_ids() {
            let meta = registry.get(zone).unwrap();
            for instant in [
                utc(2024, 7, 15, 12, 0, 0),
                utc(2024, 1, 15, 12, 0, 0),
                utc(2024, 4, 20, 18, 45, 30),
                utc(1999, 12, 31, 12, 0, 0),
            ] {
                let parts = to_local_parts(&calendar, instant, zone).unwrap();
                let back = from_local_parts(meta, &calendar, parts).unwrap();
                assert_eq!(back, instant, "round trip failed for {zone} at {instant}");
            }
        }
    }

    #[test]
    fn normal_local_reading_resolves_directly() {
        let calendar = TzDatabase::new();
        let meta = metadata("Europe/London");

        let parts = TimeParts::new(2024, 7, 15, 14, 30, 0);
        let resolved = from_local_parts(&meta, &calendar, parts).unwrap();
        assert_eq!(resolved, utc(2024, 7, 15, 13, 30, 0));
    }

    #[test]
    fn spring_forward_gap_rolls_to_same_local_date() {
        let calendar = TzDatabase::new();
        let meta = metadata("Europe/London");

        // 01:30 does not exist in London on 2024-03-31; clocks jump
        // 01:00 -> 02:00.
        let gap = TimeParts::new(2024, 3, 31, 1, 30, 0);
        let resolved = from_local_parts(&meta, &calendar, gap).unwrap();

        let local = to_local_parts(&calendar, resolved, "Europe/London").unwrap();
        assert_eq!(local.date(), (2024, 3, 31));
    }

    #[test]
    fn fall_back_ambiguity_resolves_to_the_standard_occurrence() {
        let calendar = TzDatabase::new();
        let meta = metadata("Europe/London");

        // 01:30 occurs twice on 2024-10-27: once as BST (00:30Z) and once
        // as GMT (01:30Z). The standard-offset guess lands on the GMT one.
        let ambiguous = TimeParts::new(2024, 10, 27, 1, 30, 0);
        let resolved = from_local_parts(&meta, &calendar, ambiguous).unwrap();
        assert_eq!(resolved, utc(2024, 10, 27, 1, 30, 0));
    }

    #[test]
    fn fall_back_ambiguity_in_new_york_behaves_the_same_way() {
        let calendar = TzDatabase::new();
        let meta = metadata("America/New_York");

        // 01:30 occurs twice on 2024-11-03 (EDT at 05:30Z, EST at 06:30Z).
        let ambiguous = TimeParts::new(2024, 11, 3, 1, 30, 0);
        let resolved = from_local_parts(&meta, &calendar, ambiguous).unwrap();
        assert_eq!(resolved, utc(2024, 11, 3, 6, 30, 0));
    }

    #[test]
    fn invalid_parts_are_rejected_before_searching() {
        let calendar = TzDatabase::new();
        let meta = metadata("Europe/London");

        let bad = TimeParts::new(2024, 2, 30, 0, 0, 0);
        assert!(matches!(
            from_local_parts(&meta, &calendar, bad),
            Err(TimeError::InvalidTimeParts { field: "day", .. })
        ));
    }

    #[test]
    fn unresolvable_reading_reports_zone_and_parts() {
        // Scripted platform whose local date never matches, so both search
        // passes are exhausted.
        struct NeverMatches;
        impl PlatformCalendar for NeverMatches {
            fn local_parts(&self, _: DateTime<Utc>, _: &str) -> TimeResult<TimeParts> {
                Ok(TimeParts::new(1999, 1, 1, 0, 0, 0))
            }
            fn zone_token(&self, _: DateTime<Utc>, _: &str) -> TimeResult<Option<String>> {
                Ok(None)
            }
            fn utc_offset_minutes(&self, _: DateTime<Utc>, _: &str) -> TimeResult<i32> {
                Ok(0)
            }
            fn validate_zone(&self, _: &str) -> TimeResult<()> {
                Ok(())
            }
        }

        let meta = ZoneMetadata {
            id: "Test/Zone".into(),
            standard_offset: 0,
            dst_offset: None,
            abbreviations: None,
            fallback_format: "GMT{offset}".into(),
        };
        let parts = TimeParts::new(2024, 6, 1, 12, 0, 0);
        let got = from_local_parts(&meta, &NeverMatches, parts);

        assert_eq!(
            got,
            Err(TimeError::UnresolvableLocalTime { zone: "Test/Zone".into(), parts })
        );
    }

    #[test]
    fn search_order_visits_the_guess_then_later_then_earlier() {
        let guess = utc(2024, 6, 1, 12, 0, 0);
        let first: Vec<_> = expanding_candidates(guess, 1).take(5).collect();
        assert_eq!(
            first,
            vec![
                guess,
                guess + Duration::minutes(1),
                guess - Duration::minutes(1),
                guess + Duration::minutes(2),
                guess - Duration::minutes(2),
            ]
        );
    }
}
