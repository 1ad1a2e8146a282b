//! Memory Adapter Module
//!
//! In-process adapter: one mutex-guarded store plus a background TTL sweep.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::{CacheAdapter, CacheStats, CacheStore, CacheValue};
use crate::config::Config;
use crate::error::Result;
use crate::tasks::spawn_sweep_task;

/// Registry name of the memory adapter.
pub const MEMORY_ADAPTER: &str = "memory";

// == Memory Adapter ==
/// Thread-safe in-memory cache adapter.
///
/// Every operation, reads included, goes through a single exclusive lock.
/// Expiration is checked on access, so the sweep only reclaims memory.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    /// Entry storage shared with the sweep task
    store: Arc<Mutex<CacheStore>>,
    /// Sweep task handle, set once by `start_and_gc`
    sweep: Mutex<Option<JoinHandle<()>>>,
}

impl MemoryAdapter {
    // == Constructor ==
    /// Creates an empty, unstarted adapter.
    pub fn new() -> Self {
        Self::default()
    }

    // == Stats ==
    /// Returns hit/miss/expiry counters for this instance.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Runs one sweep pass immediately. Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        self.store.lock().cleanup_expired()
    }

    /// True once `start_and_gc` has launched the sweep.
    pub fn is_started(&self) -> bool {
        self.sweep.lock().is_some()
    }
}

impl CacheAdapter for MemoryAdapter {
    fn put(&self, key: &str, value: CacheValue, ttl_seconds: u64) -> Result<()> {
        self.store.lock().put(key.to_string(), value, ttl_seconds);
        Ok(())
    }

    fn get(&self, key: &str) -> Option<CacheValue> {
        self.store.lock().get(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.store.lock().delete(key);
        Ok(())
    }

    fn is_exist(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    fn incr(&self, key: &str) -> Result<()> {
        self.store.lock().incr(key).inspect_err(|err| {
            debug!("INCR key={} failed: {}", key, err);
        })
    }

    fn decr(&self, key: &str) -> Result<()> {
        self.store.lock().decr(key).inspect_err(|err| {
            debug!("DECR key={} failed: {}", key, err);
        })
    }

    fn flush(&self) -> Result<()> {
        self.store.lock().flush();
        Ok(())
    }

    fn start_and_gc(&self, config: &Config) -> Result<()> {
        let mut sweep = self.sweep.lock();
        if sweep.is_some() {
            warn!("Memory adapter already started, ignoring repeated start");
            return Ok(());
        }

        *sweep = Some(spawn_sweep_task(
            Arc::downgrade(&self.store),
            config.interval,
        )?);
        info!("Memory adapter started");
        Ok(())
    }

    fn instantiate(&self) -> Box<dyn CacheAdapter> {
        Box::new(MemoryAdapter::new())
    }
}
