//! Cacher - A pluggable in-process key/value cache
//!
//! Backends are selected by name through an adapter registry. The built-in
//! memory adapter provides TTL expiration and typed Incr/Decr counters.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{register, AdapterRegistry, Cache, CacheAdapter, CacheValue, MemoryAdapter};
pub use config::Config;
pub use error::{CacheError, Result};
