//! # DST Transition Location
//!
//! Finds the UTC instants where DST starts and ends within a calendar
//! year, and the next transition after a reference instant.
//!
//! Rather than computing transition rules in closed form (which would
//! duplicate the platform's own rule engine), the locator scans the year
//! at day granularity and refines each detected flip to the hour: at most
//! 366 + 2×24 resolver probes per year, all bounded and predictable.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing::debug;

use crate::dst::is_in_dst;
use crate::error::{TimeError, TimeResult};
use crate::platform::PlatformCalendar;
use crate::types::{DstTransitions, NextTransition, TransitionKind, ZoneMetadata};
use crate::validate::{MAX_YEAR, is_leap_year, validate_instant, validate_year};

/// Locates the DST start and end instants for one zone in one calendar
/// year, or `None` when the zone observes no DST (or the platform data is
/// inconsistent and only one boundary could be found).
///
/// The pair is labeled by flip direction: `dst_start_utc` is where DST
/// turns on and `dst_end_utc` where it turns off. For northern-hemisphere
/// zones the start precedes the end; southern-hemisphere zones yield the
/// opposite order within a calendar year, since the summer period spans
/// the year boundary.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::platform::TzDatabase;
/// use zoned_time_lite::registry::ZoneRegistry;
/// use zoned_time_lite::transitions::transitions_for_year;
///
/// let registry = ZoneRegistry::builtin();
/// let london = registry.get("Europe/London").unwrap();
/// let tr = transitions_for_year(london, &TzDatabase::new(), 2024).unwrap().unwrap();
///
/// assert_eq!(tr.dst_start_utc, Utc.with_ymd_and_hms(2024, 3, 31, 1, 0, 0).unwrap());
/// assert_eq!(tr.dst_end_utc, Utc.with_ymd_and_hms(2024, 10, 27, 1, 0, 0).unwrap());
/// ```
pub fn transitions_for_year<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    year: i32,
) -> TimeResult<Option<DstTransitions>> {
    validate_year(year)?;
    if !metadata.observes_dst() {
        return Ok(None);
    }

    let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(TimeError::InvalidYear { year })?
        .and_time(NaiveTime::MIN);
    let midnight_jan_1 = Utc.from_utc_datetime(&jan_1);
    let days = if is_leap_year(year) { 366 } else { 365 };

    let mut start = None;
    let mut end = None;

    // Day-granularity pass at a fixed reference hour (noon UTC).
    let mut previous = is_in_dst(metadata, calendar, midnight_jan_1 + Duration::hours(12))?;
    for day in 1..days {
        let noon = midnight_jan_1 + Duration::days(day) + Duration::hours(12);
        let current = is_in_dst(metadata, calendar, noon)?;
        if current != previous {
            // The flip happened within the 24 hours after the previous
            // day's probe; refine to the first hour boundary that differs.
            if let Some(exact) = refine_to_hour(metadata, calendar, noon - Duration::hours(24), previous)? {
                if current {
                    start = Some(exact);
                } else {
                    end = Some(exact);
                }
            }
        }
        previous = current;
    }

    match (start, end) {
        (Some(dst_start_utc), Some(dst_end_utc)) => {
            Ok(Some(DstTransitions { dst_start_utc, dst_end_utc }))
        }
        (None, None) => Ok(None),
        partial => {
            debug!(zone = %metadata.id, year, ?partial, "only one DST boundary found, treating as absent");
            Ok(None)
        }
    }
}

/// First hour boundary after `from` where the resolver's answer no longer
/// equals `was`, scanning the following 24 hours.
fn refine_to_hour<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    from: DateTime<Utc>,
    was: bool,
) -> TimeResult<Option<DateTime<Utc>>> {
    for hour in 1..=24 {
        let probe = from + Duration::hours(hour);
        if is_in_dst(metadata, calendar, probe)? != was {
            return Ok(Some(probe));
        }
    }
    Ok(None)
}

/// The earliest DST boundary strictly after `instant`, looking at the
/// instant's year and the following one (capped at the supported range),
/// or `None` for zones without DST.
pub fn next_transition_from<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    instant: DateTime<Utc>,
) -> TimeResult<Option<NextTransition>> {
    validate_instant(instant)?;
    if !metadata.observes_dst() {
        return Ok(None);
    }

    let mut best: Option<NextTransition> = None;
    let first_year = instant.year();
    for year in first_year..=(first_year + 1).min(MAX_YEAR) {
        let Some(tr) = transitions_for_year(metadata, calendar, year)? else {
            continue;
        };
        for (when_utc, kind) in [
            (tr.dst_start_utc, TransitionKind::Start),
            (tr.dst_end_utc, TransitionKind::End),
        ] {
            if when_utc > instant && best.is_none_or(|b| when_utc < b.when_utc) {
                best = Some(NextTransition { when_utc, kind, year });
            }
        }
    }
    Ok(best)
}
