//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Shortest allowed interval between sweeps, in seconds.
pub const MIN_SWEEP_INTERVAL: u64 = 1;

/// Spawns a background task that periodically cleans up expired entries.
///
/// The task sleeps for the interval, then locks the store and drops every
/// expired entry. It holds only a weak reference, so it ends on the first
/// tick after the owning adapter is dropped.
///
/// # Arguments
/// * `store` - Weak reference to the adapter's store
/// * `interval_secs` - Seconds between sweeps, raised to at least 1
///
/// # Errors
/// `CacheError::NoRuntime` when called outside a Tokio runtime.
pub fn spawn_sweep_task(
    store: Weak<Mutex<CacheStore>>,
    interval_secs: u64,
) -> Result<JoinHandle<()>> {
    let handle = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
    let interval_secs = interval_secs.max(MIN_SWEEP_INTERVAL);
    let interval = Duration::from_secs(interval_secs);

    Ok(handle.spawn(async move {
        info!(
            "Starting TTL sweep task with interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let Some(store) = store.upgrade() else {
                debug!("TTL sweep: cache dropped, stopping");
                break;
            };

            let removed = store.lock().cleanup_expired();

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let store = Arc::new(Mutex::new(CacheStore::new()));

        store
            .lock()
            .put("expire_soon".to_string(), "value".into(), 1);

        let handle = spawn_sweep_task(Arc::downgrade(&store), 1).unwrap();

        // Wait for entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Physically gone, not just lazily hidden
        assert_eq!(store.lock().len(), 0);
        assert_eq!(store.lock().stats().expired, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_valid_entries() {
        let store = Arc::new(Mutex::new(CacheStore::new()));

        store
            .lock()
            .put("long_lived".to_string(), "value".into(), 3600);

        let handle = spawn_sweep_task(Arc::downgrade(&store), 1).unwrap();

        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert_eq!(store.lock().get("long_lived"), Some("value".into()));

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_stops_when_store_dropped() {
        let store = Arc::new(Mutex::new(CacheStore::new()));

        let handle = spawn_sweep_task(Arc::downgrade(&store), 0).unwrap();
        drop(store);

        // Zero interval is raised to one second, so one tick is enough
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(handle.is_finished(), "Task should end once the store is gone");
    }

    #[test]
    fn test_sweep_task_requires_runtime() {
        let store = Arc::new(Mutex::new(CacheStore::new()));

        let result = spawn_sweep_task(Arc::downgrade(&store), 1);
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }
}
