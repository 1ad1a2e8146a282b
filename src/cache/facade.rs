//! Cache Facade Module
//!
//! Turns a `Config` into a started adapter and delegates to it.

use tracing::info;

use crate::cache::{AdapterRegistry, CacheAdapter, CacheValue};
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Cache ==
/// The cache handed to callers.
///
/// Built once at startup; every operation is forwarded to the selected adapter.
#[derive(Debug)]
pub struct Cache {
    adapter: Box<dyn CacheAdapter>,
    config: Config,
}

impl Cache {
    /// Builds a cache from the process-wide registry.
    ///
    /// # Errors
    /// `CacheError::UnknownAdapter` if `config.adapter` was never registered,
    /// or whatever the adapter's `start_and_gc` reports. Both are startup
    /// failures, not something to retry.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_registry(AdapterRegistry::global(), config)
    }

    /// Builds a cache from an explicit registry.
    pub fn with_registry(registry: &AdapterRegistry, config: Config) -> Result<Self> {
        let prototype = registry
            .lookup(&config.adapter)
            .ok_or_else(|| CacheError::UnknownAdapter(config.adapter.clone()))?;

        let adapter = prototype.instantiate();
        adapter.start_and_gc(&config)?;

        info!(
            "Cache ready: adapter={}, interval={}s, session_key={}",
            config.adapter, config.interval, config.session_key
        );
        Ok(Self { adapter, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Name under which request-scoped state exposes this cache.
    pub fn session_key(&self) -> &str {
        &self.config.session_key
    }
}

impl CacheAdapter for Cache {
    fn put(&self, key: &str, value: CacheValue, ttl_seconds: u64) -> Result<()> {
        self.adapter.put(key, value, ttl_seconds)
    }

    fn get(&self, key: &str) -> Option<CacheValue> {
        self.adapter.get(key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.adapter.delete(key)
    }

    fn is_exist(&self, key: &str) -> bool {
        self.adapter.is_exist(key)
    }

    fn incr(&self, key: &str) -> Result<()> {
        self.adapter.incr(key)
    }

    fn decr(&self, key: &str) -> Result<()> {
        self.adapter.decr(key)
    }

    fn flush(&self) -> Result<()> {
        self.adapter.flush()
    }

    fn start_and_gc(&self, config: &Config) -> Result<()> {
        self.adapter.start_and_gc(config)
    }

    fn instantiate(&self) -> Box<dyn CacheAdapter> {
        self.adapter.instantiate()
    }
}
