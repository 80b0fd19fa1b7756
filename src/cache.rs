//! # Expiring Result Cache
//!
//! A small memoization shortcut with per-entry time-based expiry, shared
//! by concurrent callers. Entries are never a source of truth: every
//! algorithm must produce identical results with or without the cache.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// Mutex-protected map keyed by string, with one expiry clock per entry.
pub struct TtlCache<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self { entries: Mutex::new(HashMap::new()), ttl }
    }

    /// Returns the cached value for `key` if present and not expired.
    /// Expired entries are dropped on access.
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = lock(&self.entries);
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores `value` under `key`, restarting its expiry clock.
    pub fn insert(&self, key: &str, value: T) {
        let mut entries = lock(&self.entries);
        entries.insert(key.to_string(), Entry { value, stored_at: Instant::now() });
    }

    /// Drops every entry.
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }
}

impl<T> std::fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
