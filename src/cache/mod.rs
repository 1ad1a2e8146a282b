//! Cache Module
//!
//! Adapter contract, adapter registry, the in-memory adapter and the facade
//! callers hold on to.

mod adapter;
mod entry;
mod facade;
mod memory;
mod registry;
mod stats;
mod store;
mod value;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use adapter::CacheAdapter;
pub use entry::CacheEntry;
pub use facade::Cache;
pub use memory::{MemoryAdapter, MEMORY_ADAPTER};
pub use registry::{register, AdapterRegistry};
pub use stats::CacheStats;
pub use store::CacheStore;
pub use value::CacheValue;
