//! # Public Facade
//!
//! [`ZonedTime`] wires the injectable pieces together — metadata registry,
//! platform calendar, host-zone detector and discovery cache — and exposes
//! the public operations with optional zone identifiers.
//!
//! All input validation happens here (or in the validators the core calls
//! at its own entry points) before any algorithm runs. An omitted zone id
//! resolves through host detection; a zone id missing from the registry is
//! probed at runtime unless discovery is disabled.
//!
//! # Example
//! ```
//! use chrono::{TimeZone, Utc};
//! use zoned_time_lite::ZonedTime;
//!
//! let zt = ZonedTime::new();
//! let noon = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
//!
//! assert!(zt.is_in_dst(noon, Some("Europe/London")).unwrap());
//! assert_eq!(
//!     zt.to_local_string(noon, Some("Europe/London")).unwrap(),
//!     "2024-07-15 13:00:00 BST"
//! );
//! ```

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::cache::TtlCache;
use crate::convert;
use crate::detect::HostZoneDetector;
use crate::discover;
use crate::dst;
use crate::error::{TimeError, TimeResult};
use crate::format;
use crate::platform::{PlatformCalendar, TzDatabase};
use crate::registry::ZoneRegistry;
use crate::transitions;
use crate::types::{DstTransitions, NextTransition, TimeParts, ZoneMetadata};
use crate::working_hours;
use crate::{DEFAULT_WORKING_DAYS, DEFAULT_WORKING_HOURS_END, DEFAULT_WORKING_HOURS_START};

/// How long a discovered metadata record is reused before re-probing.
const DISCOVERY_TTL: Duration = Duration::from_secs(3600);

/// Timezone-aware date/time operations over an injectable registry and
/// platform calendar.
#[derive(Debug)]
pub struct ZonedTime<C: PlatformCalendar = TzDatabase> {
    registry: ZoneRegistry,
    calendar: C,
    detector: HostZoneDetector,
    discovered: TtlCache<ZoneMetadata>,
    discovery_enabled: bool,
}

impl ZonedTime<TzDatabase> {
    /// The production setup: built-in registry, `chrono-tz` calendar,
    /// runtime zone discovery enabled.
    pub fn new() -> Self {
        Self::with_parts(ZoneRegistry::builtin(), TzDatabase::new())
    }
}

impl Default for ZonedTime<TzDatabase> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PlatformCalendar> ZonedTime<C> {
    /// Builds a facade from explicit parts; the main seam for tests with
    /// fabricated registries or scripted calendars.
    pub fn with_parts(registry: ZoneRegistry, calendar: C) -> Self {
        Self {
            registry,
            calendar,
            detector: HostZoneDetector::new(),
            discovered: TtlCache::new(DISCOVERY_TTL),
            discovery_enabled: true,
        }
    }

    /// Disables runtime discovery: zone ids absent from the registry fail
    /// metadata-dependent operations with
    /// [`TimeError::UnsupportedZone`].
    pub fn without_discovery(mut self) -> Self {
        self.discovery_enabled = false;
        self
    }

    /// The metadata registry in use.
    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Whether `instant` is in daylight-saving time for the zone
    /// (detected when `zone` is `None`).
    pub fn is_in_dst(&self, instant: DateTime<Utc>, zone: Option<&str>) -> TimeResult<bool> {
        let zone = self.resolve_zone(zone)?;
        let metadata = self.metadata_for(&zone)?;
        dst::is_in_dst(&metadata, &self.calendar, instant)
    }

    /// The local wall-clock components of `instant` in the zone.
    ///
    /// Works for any platform-recognized zone, registered or not.
    pub fn to_local_parts(
        &self,
        instant: DateTime<Utc>,
        zone: Option<&str>,
    ) -> TimeResult<TimeParts> {
        let zone = self.resolve_zone(zone)?;
        convert::to_local_parts(&self.calendar, instant, &zone)
    }

    /// The UTC instant matching a local wall-clock reading in the zone,
    /// resolving fall-back ambiguity and spring-forward gaps.
    pub fn from_local_parts(
        &self,
        parts: TimeParts,
        zone: Option<&str>,
    ) -> TimeResult<DateTime<Utc>> {
        let zone = self.resolve_zone(zone)?;
        let metadata = self.metadata_for(&zone)?;
        convert::from_local_parts(&metadata, &self.calendar, parts)
    }

    /// `instant` formatted as local time: `"YYYY-MM-DD HH:mm:ss ZZZ"`.
    pub fn to_local_string(
        &self,
        instant: DateTime<Utc>,
        zone: Option<&str>,
    ) -> TimeResult<String> {
        let zone = self.resolve_zone(zone)?;
        let metadata = self.metadata_for(&zone)?;
        format::to_local_string(&metadata, &self.calendar, instant)
    }

    /// `instant` formatted as `"YYYY-MM-DD HH:mm:ss.ffffffZ"`.
    pub fn to_utc_string(&self, instant: DateTime<Utc>) -> TimeResult<String> {
        format::to_utc_string(instant)
    }

    /// Whether `instant` falls inside the local working-hours window
    /// (defaults 09:00–17:30).
    pub fn in_working_hours(
        &self,
        instant: DateTime<Utc>,
        zone: Option<&str>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> TimeResult<bool> {
        let zone = self.resolve_zone(zone)?;
        working_hours::in_working_hours(
            &self.calendar,
            instant,
            &zone,
            start.unwrap_or(DEFAULT_WORKING_HOURS_START),
            end.unwrap_or(DEFAULT_WORKING_HOURS_END),
        )
    }

    /// Whether the local date of `instant` is a working day (defaults
    /// Monday–Friday).
    pub fn is_working_day(
        &self,
        instant: DateTime<Utc>,
        zone: Option<&str>,
        working_days: Option<&[u8]>,
    ) -> TimeResult<bool> {
        let zone = self.resolve_zone(zone)?;
        working_hours::is_working_day(
            &self.calendar,
            instant,
            &zone,
            working_days.unwrap_or(&DEFAULT_WORKING_DAYS),
        )
    }

    /// The zone's DST boundaries within `year`, or `None` when the zone
    /// observes no DST.
    pub fn dst_transitions_for_year(
        &self,
        year: i32,
        zone: Option<&str>,
    ) -> TimeResult<Option<DstTransitions>> {
        let zone = self.resolve_zone(zone)?;
        let metadata = self.metadata_for(&zone)?;
        transitions::transitions_for_year(&metadata, &self.calendar, year)
    }

    /// The next DST boundary strictly after `instant` (defaulting to now),
    /// or `None` when the zone observes no DST.
    pub fn next_dst_transition(
        &self,
        instant: Option<DateTime<Utc>>,
        zone: Option<&str>,
    ) -> TimeResult<Option<NextTransition>> {
        let zone = self.resolve_zone(zone)?;
        let metadata = self.metadata_for(&zone)?;
        let reference = instant.unwrap_or_else(Utc::now);
        transitions::next_transition_from(&metadata, &self.calendar, reference)
    }

    fn resolve_zone(&self, zone: Option<&str>) -> TimeResult<String> {
        match zone {
            Some(id) if id.trim().is_empty() => Err(TimeError::InvalidZoneIdentifier),
            Some(id) => {
                self.calendar.validate_zone(id)?;
                Ok(id.to_string())
            }
            None => Ok(self.detector.detect(&self.calendar)),
        }
    }

    fn metadata_for(&self, zone: &str) -> TimeResult<ZoneMetadata> {
        if let Some(metadata) = self.registry.get(zone) {
            return Ok(metadata.clone());
        }
        if !self.discovery_enabled {
            return Err(TimeError::UnsupportedZone { zone: zone.to_string() });
        }
        if let Some(metadata) = self.discovered.get(zone) {
            return Ok(metadata);
        }
        let metadata = discover::probe_zone_metadata(&self.calendar, zone)?;
        self.discovered.insert(zone, metadata.clone());
        Ok(metadata)
    }
}
