//! Cache Store Module
//!
//! Entry map with lazy TTL expiration. Not synchronized by itself; the memory
//! adapter guards it with a single mutex.

use std::collections::HashMap;

use chrono::Utc;

use crate::cache::{CacheEntry, CacheStats, CacheValue};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key-value storage with per-entry TTL.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Read and expiry statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores a value, replacing any existing entry together with its TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds, 0 means no expiration
    pub fn put(&mut self, key: String, value: CacheValue, ttl_seconds: u64) {
        self.entries.insert(key, CacheEntry::new(value, ttl_seconds));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns None if the key is missing or expired. An expired entry found
    /// here is removed on the spot.
    pub fn get(&mut self, key: &str) -> Option<CacheValue> {
        match self.live_entry(key) {
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Returns true iff a non-expired entry exists for the key.
    pub fn contains(&mut self, key: &str) -> bool {
        self.live_entry(key).is_some()
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether an entry was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Incr / Decr ==
    /// Adds one to a numeric value in place.
    pub fn incr(&mut self, key: &str) -> Result<()> {
        self.live_entry_mut(key)?.value.incr(key)
    }

    /// Subtracts one from a numeric value in place.
    pub fn decr(&mut self, key: &str) -> Result<()> {
        self.live_entry_mut(key)?.value.decr(key)
    }

    // == Flush ==
    /// Removes every entry.
    pub fn flush(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let count = before - self.entries.len();
        self.stats.record_expired(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops the entry if its TTL has elapsed. Returns true if it was dropped.
    fn evict_if_expired(&mut self, key: &str) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired());
        if expired {
            self.entries.remove(key);
            self.stats.record_expired(1);
            self.stats.set_total_entries(self.entries.len());
        }
        expired
    }

    fn live_entry(&mut self, key: &str) -> Option<&CacheEntry> {
        self.evict_if_expired(key);
        self.entries.get(key)
    }

    fn live_entry_mut(&mut self, key: &str) -> Result<&mut CacheEntry> {
        self.evict_if_expired(key);
        self.entries
            .get_mut(key)
            .ok_or_else(|| CacheError::KeyNotFound(key.to_string()))
    }
}
