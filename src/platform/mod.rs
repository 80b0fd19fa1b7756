//! # Platform Calendar Port
//!
//! The boundary between the core algorithms and the platform's timezone
//! database. The core treats the platform as ground truth for timezone
//! rules and never re-implements rule tables itself.
//!
//! # Purpose
//! This trait abstracts local-time computation so that:
//!
//! - Core logic does **not** depend on a concrete timezone database
//! - Implementations can be swapped (compiled-in tzdb, scripted doubles)
//! - Tests can fabricate degenerate platform behavior deterministically
//!
//! # Typical Implementations
//! - [`TzDatabase`]: the production adapter over `chrono-tz`
//! - Scripted doubles inside test modules

mod tz_database;

pub use tz_database::TzDatabase;

use chrono::{DateTime, Utc};

use crate::error::TimeResult;
use crate::types::TimeParts;

/// A capability that answers local-time questions for `(instant, zone)`
/// pairs from the platform's timezone database.
pub trait PlatformCalendar {
    /// The six calendar/clock components displayed on a local clock in
    /// `zone` at `instant`.
    fn local_parts(&self, instant: DateTime<Utc>, zone: &str) -> TimeResult<TimeParts>;

    /// A short human-readable zone-name token for `instant` (e.g. `"BST"`),
    /// or `None` when the platform only has a generic numeric offset.
    fn zone_token(&self, instant: DateTime<Utc>, zone: &str) -> TimeResult<Option<String>>;

    /// The actual UTC offset in effect at `instant`, in minutes east of UTC.
    fn utc_offset_minutes(&self, instant: DateTime<Utc>, zone: &str) -> TimeResult<i32>;

    /// Checks that the platform recognizes `zone` at all.
    fn validate_zone(&self, zone: &str) -> TimeResult<()>;
}
