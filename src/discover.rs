//! # Runtime Zone Discovery
//!
//! Optional extension over the static registry: for a platform-valid zone
//! with no registered metadata, synthesizes a [`ZoneMetadata`] record by
//! sampling the zone's UTC offset in two hemisphere-typical seasons.
//!
//! Discovered records carry no abbreviations, so the DST resolver uses its
//! offset fallback and the formatter its numeric fallback. The core stays
//! agnostic to whether metadata came from the registry or from here.

use chrono::{Datelike, TimeZone, Utc};
use tracing::debug;

use crate::error::{TimeError, TimeResult};
use crate::platform::PlatformCalendar;
use crate::types::ZoneMetadata;
use crate::validate::{MAX_YEAR, MIN_YEAR};

/// Synthesizes metadata for a platform-valid zone by probing one winter
/// and one summer instant (Jan 15 / Jul 15, noon UTC, current year).
///
/// Equal offsets mean the zone observes no DST. Otherwise the smaller
/// offset is the standard one: DST is a positive shift by definition, in
/// either hemisphere.
///
/// # Errors
/// [`TimeError::UnsupportedZone`] (or
/// [`TimeError::InvalidZoneIdentifier`]) when the platform rejects the id.
pub fn probe_zone_metadata<C: PlatformCalendar>(
    calendar: &C,
    zone: &str,
) -> TimeResult<ZoneMetadata> {
    calendar.validate_zone(zone)?;

    let year = Utc::now().year().clamp(MIN_YEAR, MAX_YEAR);
    let january = Utc
        .with_ymd_and_hms(year, 1, 15, 12, 0, 0)
        .single()
        .ok_or(TimeError::InvalidYear { year })?;
    let july = Utc
        .with_ymd_and_hms(year, 7, 15, 12, 0, 0)
        .single()
        .ok_or(TimeError::InvalidYear { year })?;

    let winter_offset = calendar.utc_offset_minutes(january, zone)?;
    let summer_offset = calendar.utc_offset_minutes(july, zone)?;

    let (standard_offset, dst_offset) = if winter_offset == summer_offset {
        (winter_offset, None)
    } else {
        (winter_offset.min(summer_offset), Some(winter_offset.max(summer_offset)))
    };

    debug!(zone, standard_offset, ?dst_offset, "synthesized zone metadata from offset probes");

    Ok(ZoneMetadata {
        id: zone.to_string(),
        standard_offset,
        dst_offset,
        abbreviations: None,
        fallback_format: "GMT{offset}".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::TzDatabase;
    use crate::registry::ZoneRegistry;

    #[test]
    fn probes_a_northern_dst_zone() {
        let meta = probe_zone_metadata(&TzDatabase::new(), "Europe/Madrid").unwrap();

        assert_eq!(meta.id, "Europe/Madrid");
        assert_eq!(meta.standard_offset, 60);
        assert_eq!(meta.dst_offset, Some(120));
        assert!(meta.abbreviations.is_none());
    }

    #[test]
    fn probes_a_southern_dst_zone() {
        // DST is active in January here; the probe must still identify the
        // smaller offset as standard.
        let meta = probe_zone_metadata(&TzDatabase::new(), "Pacific/Auckland").unwrap();

        assert_eq!(meta.standard_offset, 720);
        assert_eq!(meta.dst_offset, Some(780));
    }

    #[test]
    fn probes_a_zone_without_dst() {
        let meta = probe_zone_metadata(&TzDatabase::new(), "Asia/Kolkata").unwrap();

        assert_eq!(meta.standard_offset, 330);
        assert_eq!(meta.dst_offset, None);
    }

    #[test]
    fn matches_registry_offsets_for_known_zones() {
        let registry = ZoneRegistry::builtin();
        let calendar = TzDatabase::new();

        for zone in ["Europe/London", "America/New_York", "Australia/Sydney", "Asia/Tokyo"] {
            let registered = registry.get(zone).unwrap();
            let probed = probe_zone_metadata(&calendar, zone).unwrap();
            assert_eq!(probed.standard_offset, registered.standard_offset, "{zone}");
            assert_eq!(probed.dst_offset, registered.dst_offset, "{zone}");
        }
    }

    #[test]
    fn rejects_unknown_zones() {
        let got = probe_zone_metadata(&TzDatabase::new(), "Not/AZone");
        assert_eq!(got, Err(TimeError::UnsupportedZone { zone: "Not/AZone".into() }));
    }
}
