//! # zoned_time_lite
//!
//! Lightweight timezone-aware date/time utilities with multi-timezone DST
//! support.
//!
//! Given a UTC instant and an IANA timezone identifier, this crate answers
//! questions about local time — DST status, local clock components,
//! formatted strings, working-hours membership, and DST transition
//! boundaries — by delegating to the platform timezone database
//! (`chrono-tz`) rather than embedding rule tables of its own.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use zoned_time_lite::ZonedTime;
//!
//! let zt = ZonedTime::new();
//! let noon = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
//!
//! assert!(zt.is_in_dst(noon, Some("Europe/London")).unwrap());
//! let parts = zt.to_local_parts(noon, Some("America/New_York")).unwrap();
//! assert_eq!((parts.hour, parts.minute), (8, 0));
//! ```
//!
//! ## Layout
//!
//! - [`zoned_time`]: the [`ZonedTime`] facade over every public operation
//! - [`dst`], [`convert`], [`transitions`]: the core algorithms
//! - [`registry`], [`platform`], [`detect`], [`discover`]: metadata and
//!   platform collaborators, all injectable
//! - [`format`], [`working_hours`], [`validate`]: thin stateless layers
//!
//! Supported instants range from 1970-01-01 through 2100-12-31; anything
//! outside fails validation with a typed [`error::TimeError`].

// ===============================
// Re-exports of external crates
// ===============================

pub use chrono;
pub use chrono_tz;

// ===============================
// Public modules
// ===============================
pub mod cache;
pub mod convert;
pub mod detect;
pub mod discover;
pub mod dst;
pub mod error;
pub mod format;
pub mod platform;
pub mod registry;
pub mod transitions;
pub mod types;
pub mod validate;
pub mod working_hours;
pub mod zoned_time;

pub use error::{TimeError, TimeResult};
pub use types::{
    DstTransitions, NextTransition, TimeParts, TransitionKind, ZoneAbbreviations, ZoneMetadata,
};
pub use zoned_time::ZonedTime;

/// Zone used when host detection finds nothing better.
pub const DEFAULT_TIMEZONE: &str = "Europe/London";
/// Default working-hours window start (`HH:MM`).
pub const DEFAULT_WORKING_HOURS_START: &str = "09:00";
/// Default working-hours window end (`HH:MM`).
pub const DEFAULT_WORKING_HOURS_END: &str = "17:30";
/// Default working days: Monday through Friday (0 = Monday).
pub const DEFAULT_WORKING_DAYS: [u8; 5] = [0, 1, 2, 3, 4];
