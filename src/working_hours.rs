//! # Working Hours and Business Days
//!
//! Pure arithmetic over local clock minutes: converts the instant to local
//! wall-clock components and compares minutes-since-midnight against a
//! window, or the local calendar date's weekday against a day set.
//!
//! A window whose start is later than its end spans midnight (e.g.
//! `22:00`–`06:00` for a night shift).

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::convert::to_local_parts;
use crate::error::{TimeError, TimeResult};
use crate::platform::PlatformCalendar;
use crate::validate::{parse_time_window, validate_working_days};

/// Returns `true` when `instant`, read as local time in `zone`, falls
/// within the closed `[start, end]` window (`HH:MM` boundaries).
///
/// With `start > end` the window wraps midnight and membership becomes
/// `current >= start || current <= end`.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::platform::TzDatabase;
/// use zoned_time_lite::working_hours::in_working_hours;
///
/// let calendar = TzDatabase::new();
/// let instant = Utc.with_ymd_and_hms(2024, 7, 15, 13, 0, 0).unwrap();
/// // 14:00 BST is inside 09:00-17:30.
/// assert!(in_working_hours(&calendar, instant, "Europe/London", "09:00", "17:30").unwrap());
/// ```
pub fn in_working_hours<C: PlatformCalendar>(
    calendar: &C,
    instant: DateTime<Utc>,
    zone: &str,
    start: &str,
    end: &str,
) -> TimeResult<bool> {
    let (start_hour, start_minute) = parse_time_window(start, "start")?;
    let (end_hour, end_minute) = parse_time_window(end, "end")?;

    let parts = to_local_parts(calendar, instant, zone)?;
    let current = parts.hour * 60 + parts.minute;
    let start_minutes = start_hour * 60 + start_minute;
    let end_minutes = end_hour * 60 + end_minute;

    if start_minutes <= end_minutes {
        Ok(start_minutes <= current && current <= end_minutes)
    } else {
        Ok(current >= start_minutes || current <= end_minutes)
    }
}

/// Returns `true` when the *local* calendar date of `instant` in `zone`
/// falls on one of `working_days` (0 = Monday … 6 = Sunday).
///
/// The weekday is derived from the local date, not the UTC date, so an
/// instant late on a UTC Friday can already be a Saturday in a zone far
/// east of UTC.
pub fn is_working_day<C: PlatformCalendar>(
    calendar: &C,
    instant: DateTime<Utc>,
    zone: &str,
    working_days: &[u8],
) -> TimeResult<bool> {
    validate_working_days(working_days)?;

    let parts = to_local_parts(calendar, instant, zone)?;
    let local_date = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day).ok_or(
        TimeError::InvalidTimeParts {
            field: "day",
            value: parts.day as i64,
            min: 1,
            max: crate::validate::days_in_month(parts.year, parts.month) as i64,
        },
    )?;
    let day_of_week = local_date.weekday().num_days_from_monday() as u8;

    Ok(working_days.contains(&day_of_week))
}
