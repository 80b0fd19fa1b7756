//! # Input Validation
//!
//! Stateless validators applied at the public-operation boundary.
//! Each validator fails fast with a [`TimeError`] naming the offending
//! value; nothing here ever substitutes a default.
//!
//! # Supported Range
//! Instants and years are accepted in [1970, 2100] inclusive. Wall-clock
//! components are checked with leap-year-aware day bounds.

use chrono::{DateTime, Datelike, Utc};

use crate::error::{TimeError, TimeResult};
use crate::types::TimeParts;

/// First supported year.
pub const MIN_YEAR: i32 = 1970;
/// Last supported year.
pub const MAX_YEAR: i32 = 2100;

/// Validates that an instant falls within the supported range.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::validate::validate_instant;
///
/// let ok = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
/// assert!(validate_instant(ok).is_ok());
///
/// let too_early = Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap();
/// assert!(validate_instant(too_early).is_err());
/// ```
pub fn validate_instant(instant: DateTime<Utc>) -> TimeResult<()> {
    let year = instant.year();
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::InvalidInstant { instant });
    }
    Ok(())
}

/// Validates a transition-query year.
pub fn validate_year(year: i32) -> TimeResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::InvalidYear { year });
    }
    Ok(())
}

/// Validates wall-clock components against real calendar bounds.
///
/// The day bound depends on the month and, for February, on whether the
/// year is a leap year.
pub fn validate_time_parts(parts: &TimeParts) -> TimeResult<()> {
    check_range("year", parts.year as i64, MIN_YEAR as i64, MAX_YEAR as i64)?;
    check_range("month", parts.month as i64, 1, 12)?;
    let day_max = days_in_month(parts.year, parts.month) as i64;
    check_range("day", parts.day as i64, 1, day_max)?;
    check_range("hour", parts.hour as i64, 0, 23)?;
    check_range("minute", parts.minute as i64, 0, 59)?;
    check_range("second", parts.second as i64, 0, 59)?;
    Ok(())
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> TimeResult<()> {
    if value < min || value > max {
        return Err(TimeError::InvalidTimeParts { field, value, min, max });
    }
    Ok(())
}

/// Parses a strict zero-padded 24-hour `HH:MM` boundary string into
/// `(hour, minute)`. `which` names the boundary in the error message
/// (`"start"` or `"end"`).
pub fn parse_time_window(value: &str, which: &'static str) -> TimeResult<(u32, u32)> {
    let invalid = || TimeError::InvalidTimeWindow { which, value: value.to_string() };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b':'
        && bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit());
    if !well_formed {
        return Err(invalid());
    }

    let hour: u32 = value[..2].parse().map_err(|_| invalid())?;
    let minute: u32 = value[3..].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Validates a working-day set: non-empty, every value in 0–6
/// (0 = Monday, 6 = Sunday), no duplicates.
pub fn validate_working_days(days: &[u8]) -> TimeResult<()> {
    if days.is_empty() {
        return Err(TimeError::InvalidWorkingDaySet { detail: "empty set".into() });
    }

    let mut seen = [false; 7];
    for &day in days {
        if day > 6 {
            return Err(TimeError::InvalidWorkingDaySet {
                detail: format!("{day} is out of range, must be between 0 (Monday) and 6 (Sunday)"),
            });
        }
        if seen[day as usize] {
            return Err(TimeError::InvalidWorkingDaySet {
                detail: format!("duplicate day {day}"),
            });
        }
        seen[day as usize] = true;
    }
    Ok(())
}

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, leap-year aware.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}
