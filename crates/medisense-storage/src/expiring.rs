//! Key-value storage where every entry carries a time-to-live.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StorageError;

/// A store whose entries disappear once their TTL has elapsed.
///
/// Expired entries are never returned, whether or not they have been purged.
#[async_trait]
pub trait ExpiringStore<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    /// Insert or replace `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: V, ttl: Duration) -> Result<(), StorageError>;

    async fn get(&self, key: &str) -> Result<Option<V>, StorageError>;

    /// Remove `key`. Returns whether a live entry was removed.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// Re-arm the TTL of a live entry. Returns false if there is none.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, StorageError>;

    /// Drop every expired entry. Returns how many were dropped.
    async fn purge_expired(&self) -> Result<usize, StorageError>;
}

/// Drop expired entries before a write, so keys that are never read again
/// do not accumulate.
pub(crate) async fn purge_logged<V>(store: &dyn ExpiringStore<V>) -> Result<(), StorageError>
where
    V: Clone + Send + Sync + 'static,
{
    let purged = store.purge_expired().await?;
    if purged > 0 {
        tracing::debug!(purged, "expired entries purged");
    }
    Ok(())
}

/// Source of "now" in unix milliseconds.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(|| jiff::Timestamp::now().as_millisecond())
}

struct Entry<V> {
    value: V,
    expires_at_ms: i64,
}

/// In-process [`ExpiringStore`].
pub struct MemoryExpiringStore<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    clock: Clock,
}

impl<V> MemoryExpiringStore<V> {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Entries held, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn deadline(&self, ttl: Duration) -> i64 {
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        (self.clock)().saturating_add(ttl_ms)
    }
}

impl<V> Default for MemoryExpiringStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> ExpiringStore<V> for MemoryExpiringStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    async fn set(&self, key: &str, value: V, ttl: Duration) -> Result<(), StorageError> {
        let expires_at_ms = self.deadline(ttl);
        self.entries.lock().await.insert(
            key.to_string(),
            Entry {
                value,
                expires_at_ms,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<V>, StorageError> {
        let now = (self.clock)();
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.get(key) else {
            return Ok(None);
        };
        if entry.expires_at_ms > now {
            return Ok(Some(entry.value.clone()));
        }
        entries.remove(key);
        Ok(None)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let now = (self.clock)();
        let removed = self.entries.lock().await.remove(key);
        Ok(removed.is_some_and(|e| e.expires_at_ms > now))
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, StorageError> {
        let now = (self.clock)();
        let expires_at_ms = self.deadline(ttl);
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.get_mut(key) else {
            return Ok(false);
        };
        if entry.expires_at_ms > now {
            entry.expires_at_ms = expires_at_ms;
            return Ok(true);
        }
        entries.remove(key);
        Ok(false)
    }

    async fn purge_expired(&self) -> Result<usize, StorageError> {
        let now = (self.clock)();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, e| e.expires_at_ms > now);
        Ok(before - entries.len())
    }
}
