//! # Display Formatting
//!
//! Thin string-formatting layer over the converter and DST resolver.
//!
//! Local strings carry the zone's preferred abbreviation for the
//! currently-active offset when one is registered, and otherwise a numeric
//! offset rendered through the zone's fallback template. UTC strings use a
//! fixed sortable format with microsecond padding.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::dst::is_in_dst;
use crate::error::TimeResult;
use crate::platform::PlatformCalendar;
use crate::types::ZoneMetadata;
use crate::validate::validate_instant;

/// Formats a UTC instant as local time in the zone described by
/// `metadata`: `"YYYY-MM-DD HH:mm:ss ZZZ"`.
///
/// `ZZZ` is the preferred abbreviation for the active offset (standard or
/// DST, chosen via the resolver), falling back to a numeric offset such as
/// `"GMT+09:00"` when none is registered. An adapter-reported hour of 24
/// (some platforms represent midnight that way) is normalized to 0.
pub fn to_local_string<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    instant: DateTime<Utc>,
) -> TimeResult<String> {
    validate_instant(instant)?;

    let parts = calendar.local_parts(instant, &metadata.id)?;
    let hour = if parts.hour == 24 { 0 } else { parts.hour };
    let label = zone_label(metadata, calendar, instant)?;

    Ok(format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} {}",
        parts.year, parts.month, parts.day, hour, parts.minute, parts.second, label
    ))
}

/// Formats a UTC instant as `"YYYY-MM-DD HH:mm:ss.ffffffZ"`.
///
/// The fractional field is the stored millisecond value zero-extended to
/// six digits, not computed to true microsecond resolution, so output is
/// stable across inputs of differing precision and sorts chronologically.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use zoned_time_lite::format::to_utc_string;
///
/// let instant = Utc.timestamp_millis_opt(1721054142123).unwrap();
/// assert_eq!(to_utc_string(instant).unwrap(), "2024-07-15 14:35:42.123000Z");
/// ```
pub fn to_utc_string(instant: DateTime<Utc>) -> TimeResult<String> {
    validate_instant(instant)?;

    Ok(format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}000Z",
        instant.year(),
        instant.month(),
        instant.day(),
        instant.hour(),
        instant.minute(),
        instant.second(),
        instant.timestamp_subsec_millis(),
    ))
}

/// Renders an offset in minutes east of UTC through a display template,
/// replacing `{offset}` with `±HH:MM`.
///
/// # Example
/// ```
/// use zoned_time_lite::format::format_offset;
///
/// assert_eq!(format_offset("GMT{offset}", 540), "GMT+09:00");
/// assert_eq!(format_offset("GMT{offset}", -300), "GMT-05:00");
/// ```
pub fn format_offset(template: &str, offset_minutes: i32) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let abs = offset_minutes.unsigned_abs();
    let rendered = format!("{sign}{:02}:{:02}", abs / 60, abs % 60);
    template.replace("{offset}", &rendered)
}

fn zone_label<C: PlatformCalendar>(
    metadata: &ZoneMetadata,
    calendar: &C,
    instant: DateTime<Utc>,
) -> TimeResult<String> {
    let abbrs = metadata.abbreviations.as_ref();
    let in_dst = is_in_dst(metadata, calendar, instant)?;

    let (abbreviation, offset) = if in_dst {
        // in_dst implies a recorded DST offset.
        (
            abbrs.and_then(|a| a.dst.clone()),
            metadata.dst_offset.unwrap_or(metadata.standard_offset),
        )
    } else {
        (abbrs.map(|a| a.standard.clone()), metadata.standard_offset)
    };

    Ok(abbreviation.unwrap_or_else(|| format_offset(&metadata.fallback_format, offset)))
}
