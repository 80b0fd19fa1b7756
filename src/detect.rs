//! # Host Timezone Detection
//!
//! Guesses the caller's own timezone from the ambient environment with a
//! simple fallback chain:
//!
//! 1. The `TZ` environment variable, when it names a platform-valid zone
//! 2. The operating system's configured zone via `iana-time-zone`
//! 3. [`DEFAULT_TIMEZONE`](crate::DEFAULT_TIMEZONE) (`"Europe/London"`)
//!
//! The detected zone is cached with a time-based expiry so repeated calls
//! with an omitted zone id stay cheap. Environment access is injectable
//! for deterministic tests.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::DEFAULT_TIMEZONE;
use crate::platform::PlatformCalendar;

/// How long a detection result is reused before re-probing the host.
const DETECTION_TTL: Duration = Duration::from_secs(300);

struct CachedZone {
    zone: String,
    detected_at: Instant,
}

/// Detects and caches the host's timezone.
#[derive(Default)]
pub struct HostZoneDetector {
    cached: Mutex<Option<CachedZone>>,
}

impl std::fmt::Debug for HostZoneDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostZoneDetector").finish_non_exhaustive()
    }
}

impl HostZoneDetector {
    /// Creates a detector with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The host's timezone identifier, from cache when fresh.
    ///
    /// Detection never fails; the chain bottoms out at
    /// [`DEFAULT_TIMEZONE`](crate::DEFAULT_TIMEZONE).
    pub fn detect<C: PlatformCalendar>(&self, calendar: &C) -> String {
        {
            let cached = lock(&self.cached);
            if let Some(entry) = cached.as_ref() {
                if entry.detected_at.elapsed() < DETECTION_TTL {
                    return entry.zone.clone();
                }
            }
        }

        let zone = detect_host_zone(calendar);
        let mut cached = lock(&self.cached);
        *cached = Some(CachedZone { zone: zone.clone(), detected_at: Instant::now() });
        zone
    }
}

/// Runs the detection chain against the real process environment.
pub fn detect_host_zone<C: PlatformCalendar>(calendar: &C) -> String {
    detect_host_zone_from(|key| std::env::var(key).ok(), calendar)
}

/// Runs the detection chain with a custom environment provider.
///
/// Useful for testing or mocking environment sources.
pub fn detect_host_zone_from<C, F>(provider: F, calendar: &C) -> String
where
    C: PlatformCalendar,
    F: Fn(&str) -> Option<String>,
{
    if let Some(tz) = provider("TZ") {
        let tz = tz.trim().to_string();
        if calendar.validate_zone(&tz).is_ok() {
            debug!(zone = %tz, "host timezone from TZ environment variable");
            return tz;
        }
        debug!(zone = %tz, "ignoring TZ environment variable, not a platform-valid zone");
    }

    if let Ok(tz) = iana_time_zone::get_timezone() {
        if calendar.validate_zone(&tz).is_ok() {
            debug!(zone = %tz, "host timezone from operating system");
            return tz;
        }
    }

    debug!(zone = DEFAULT_TIMEZONE, "host timezone detection fell back to the default");
    DEFAULT_TIMEZONE.to_string()
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
