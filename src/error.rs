//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache adapters, the registry and the facade.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Incr/Decr on a key that is absent or expired
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Incr/Decr on a value that is not numeric
    #[error("Type mismatch for key {key}: {kind} is not numeric")]
    TypeMismatch { key: String, kind: &'static str },

    /// Decr of an unsigned value already at zero
    #[error("Underflow for key {key}: {kind} is already zero")]
    Underflow { key: String, kind: &'static str },

    /// Incr/Decr past the representable range of an integer kind
    #[error("Overflow for key {key}: {kind} is at its limit")]
    Overflow { key: String, kind: &'static str },

    /// No adapter registered under the requested name
    #[error("Unknown cache adapter: {0}")]
    UnknownAdapter(String),

    /// An adapter was already registered under this name
    #[error("Cache adapter registered twice: {0}")]
    DuplicateAdapter(String),

    /// The background sweep needs a Tokio runtime to be spawned on
    #[error("No Tokio runtime available to run the expiration sweep")]
    NoRuntime,

    /// Structured value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CacheError {
    /// Returns true for errors that indicate a deployment or programming mistake.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CacheError::UnknownAdapter(_) | CacheError::DuplicateAdapter(_) | CacheError::NoRuntime
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
