//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.

use std::env;

/// Name of the built-in in-memory adapter.
pub const DEFAULT_ADAPTER: &str = "memory";

/// Default sweep interval in seconds.
pub const DEFAULT_INTERVAL: u64 = 60;

/// Default name under which request-scoped state exposes the cache.
pub const DEFAULT_SESSION_KEY: &str = "cache";

/// Cache configuration parameters.
///
/// Immutable once handed to an adapter's `start_and_gc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Registry name of the adapter to use
    pub adapter: String,
    /// Backend-specific connection string (unused by the memory adapter)
    pub adapter_config: String,
    /// Expiration sweep interval in seconds
    pub interval: u64,
    /// Key the cache is exposed under in request-scoped state
    pub session_key: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ADAPTER` - Adapter name (default: memory)
    /// - `CACHE_ADAPTER_CONFIG` - Backend connection string (default: empty)
    /// - `CACHE_INTERVAL` - Sweep interval in seconds (default: 60)
    /// - `CACHE_SESSION_KEY` - Request-state key (default: cache)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            adapter: env::var("CACHE_ADAPTER")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.adapter),
            adapter_config: env::var("CACHE_ADAPTER_CONFIG").unwrap_or(defaults.adapter_config),
            interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.interval),
            session_key: env::var("CACHE_SESSION_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.session_key),
        }
    }

    pub fn with_adapter(mut self, adapter: impl Into<String>) -> Self {
        self.adapter = adapter.into();
        self
    }

    pub fn with_adapter_config(mut self, adapter_config: impl Into<String>) -> Self {
        self.adapter_config = adapter_config.into();
        self
    }

    /// Sets the sweep interval; zero falls back to the default.
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = if interval == 0 { DEFAULT_INTERVAL } else { interval };
        self
    }

    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        self.session_key = session_key.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adapter: DEFAULT_ADAPTER.to_string(),
            adapter_config: String::new(),
            interval: DEFAULT_INTERVAL,
            session_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }
}
