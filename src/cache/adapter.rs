//! Cache Adapter Contract
//!
//! Capability set every storage backend implements.

use std::fmt;

use crate::cache::CacheValue;
use crate::config::Config;
use crate::error::Result;

/// Operations shared by every cache backend.
///
/// Adapters are registered as prototypes: the registry keeps one unstarted
/// instance per name, and each facade gets its own copy via
/// [`instantiate`](CacheAdapter::instantiate) before calling
/// [`start_and_gc`](CacheAdapter::start_and_gc).
pub trait CacheAdapter: fmt::Debug + Send + Sync {
    /// Stores `value` under `key`, replacing any previous value and TTL.
    /// A `ttl_seconds` of 0 means the entry never expires.
    fn put(&self, key: &str, value: CacheValue, ttl_seconds: u64) -> Result<()>;

    /// Returns the live value for `key`, or None if absent or expired.
    fn get(&self, key: &str) -> Option<CacheValue>;

    /// Removes `key`. Succeeds whether or not it was present.
    fn delete(&self, key: &str) -> Result<()>;

    /// True iff a non-expired entry exists for `key`.
    fn is_exist(&self, key: &str) -> bool;

    /// Adds one to the numeric value under `key`, keeping its kind.
    fn incr(&self, key: &str) -> Result<()>;

    /// Subtracts one from the numeric value under `key`, keeping its kind.
    fn decr(&self, key: &str) -> Result<()>;

    /// Removes every entry.
    fn flush(&self) -> Result<()>;

    /// One-time initialization: applies `config` and launches the expiration sweep.
    fn start_and_gc(&self, config: &Config) -> Result<()>;

    /// Creates a fresh, unstarted adapter of the same kind.
    fn instantiate(&self) -> Box<dyn CacheAdapter>;
}
