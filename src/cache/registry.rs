//! Adapter Registry Module
//!
//! Maps adapter names to prototypes so a backend can be picked by a runtime
//! string. Append-only: there is no way to unregister.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::info;

use crate::cache::{CacheAdapter, MemoryAdapter, MEMORY_ADAPTER};
use crate::error::{CacheError, Result};

static GLOBAL: OnceLock<AdapterRegistry> = OnceLock::new();

// == Adapter Registry ==
/// Table of adapter prototypes keyed by name.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    adapters: RwLock<HashMap<String, Arc<dyn CacheAdapter>>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in `memory` adapter.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry
            .adapters
            .write()
            .insert(MEMORY_ADAPTER.to_string(), Arc::new(MemoryAdapter::new()));
        registry
    }

    /// Process-wide registry, created with the built-ins on first use.
    pub fn global() -> &'static AdapterRegistry {
        GLOBAL.get_or_init(Self::with_builtins)
    }

    // == Register ==
    /// Stores `prototype` under `name`.
    ///
    /// # Errors
    /// `CacheError::DuplicateAdapter` if the name is taken. This is a
    /// configuration mistake and should abort startup.
    pub fn register<A>(&self, name: &str, prototype: A) -> Result<()>
    where
        A: CacheAdapter + 'static,
    {
        let mut adapters = self.adapters.write();
        if adapters.contains_key(name) {
            return Err(CacheError::DuplicateAdapter(name.to_string()));
        }

        adapters.insert(name.to_string(), Arc::new(prototype));
        info!("Registered cache adapter '{}'", name);
        Ok(())
    }

    // == Lookup ==
    /// Returns the prototype registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn CacheAdapter>> {
        self.adapters.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adapters.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.adapters.read().keys().cloned().collect();
        names.sort();
        names
    }
}

/// Registers `prototype` in the process-wide registry.
pub fn register<A>(name: &str, prototype: A) -> Result<()>
where
    A: CacheAdapter + 'static,
{
    AdapterRegistry::global().register(name, prototype)
}
