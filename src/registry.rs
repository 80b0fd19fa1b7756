//! # Timezone Metadata Registry
//!
//! A small, explicitly constructed table mapping supported IANA identifiers
//! to their standard offset, DST offset and preferred abbreviations.
//!
//! The registry is pure data: actual DST transition rules are always
//! resolved through the platform timezone database. It is an injectable
//! value rather than process-wide global state, so tests can run against
//! fabricated metadata.
//!
//! # Example
//! ```
//! use zoned_time_lite::registry::ZoneRegistry;
//!
//! let registry = ZoneRegistry::builtin();
//! let london = registry.get("Europe/London").unwrap();
//! assert_eq!(london.standard_offset, 0);
//! assert_eq!(london.dst_offset, Some(60));
//! ```

use std::collections::HashMap;

use crate::types::{ZoneAbbreviations, ZoneMetadata};

/// Numeric-offset display template shared by all built-in zones.
const FALLBACK_FORMAT: &str = "GMT{offset}";

/// Injectable metadata table indexed by IANA zone identifier.
#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    zones: HashMap<String, ZoneMetadata>,
}

impl ZoneRegistry {
    /// An empty registry. Useful together with [`ZoneRegistry::with_zone`]
    /// for isolated tests.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table of supported zones.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        // GMT is UTC+0, BST is UTC+1
        registry.insert(zone("Europe/London", 0, Some(60), Some(("GMT", "BST"))));
        // EST is UTC-5, EDT is UTC-4
        registry.insert(zone("America/New_York", -300, Some(-240), Some(("EST", "EDT"))));
        // PST is UTC-8, PDT is UTC-7
        registry.insert(zone("America/Los_Angeles", -480, Some(-420), Some(("PST", "PDT"))));
        // CET is UTC+1, CEST is UTC+2
        registry.insert(zone("Europe/Paris", 60, Some(120), Some(("CET", "CEST"))));
        registry.insert(zone("Europe/Berlin", 60, Some(120), Some(("CET", "CEST"))));
        // JST is UTC+9, no DST in Japan
        registry.insert(zone("Asia/Tokyo", 540, None, None));
        // AEST is UTC+10, AEDT is UTC+11
        registry.insert(zone("Australia/Sydney", 600, Some(660), Some(("AEST", "AEDT"))));

        registry
    }

    /// Adds or replaces one zone record, returning the registry for chaining.
    pub fn with_zone(mut self, metadata: ZoneMetadata) -> Self {
        self.insert(metadata);
        self
    }

    /// Looks up the metadata for a zone identifier.
    pub fn get(&self, zone_id: &str) -> Option<&ZoneMetadata> {
        self.zones.get(zone_id)
    }

    /// Returns `true` when the zone identifier is registered.
    pub fn contains(&self, zone_id: &str) -> bool {
        self.zones.contains_key(zone_id)
    }

    /// All registered zone identifiers, sorted for stable output.
    pub fn zone_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.zones.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    fn insert(&mut self, metadata: ZoneMetadata) {
        self.zones.insert(metadata.id.clone(), metadata);
    }
}

fn zone(
    id: &str,
    standard_offset: i32,
    dst_offset: Option<i32>,
    abbreviations: Option<(&str, &str)>,
) -> ZoneMetadata {
    ZoneMetadata {
        id: id.to_string(),
        standard_offset,
        dst_offset,
        abbreviations: abbreviations.map(|(standard, dst)| ZoneAbbreviations::with_dst(standard, dst)),
        fallback_format: FALLBACK_FORMAT.to_string(),
    }
}
