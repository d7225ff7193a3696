//! In-process response cache with time-based expiry.

use super::{CacheInterface, Clock, SystemClock};
use async_trait::async_trait;
use hrmetrics_core::HrResult;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default freshness window for cached reports (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A stored value plus the instant it was written.
///
/// The value is immutable once stored: `set_raw` replaces the whole entry,
/// never mutates it in place.
struct CacheEntry {
    value: String,
    created_at: Instant,
}

/// In-process cache mapping request keys to JSON payloads.
///
/// One freshness window applies to every key. Stale entries are not actively
/// purged - a stale entry stays in the map until the next overwrite for its
/// key, so memory for keys that are never requested again is not reclaimed.
/// That unbounded-growth property is acceptable here because the key space is
/// the fixed set of named reports; a generalized deployment would want a
/// sweep or a size bound.
///
/// The map sits behind a mutex so parallel request handlers can share one
/// instance; no operation holds the lock across an await point.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    enabled: bool,
}

impl MemoryCache {
    /// Creates a cache with the given freshness window.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates a cache with an injected time source.
    #[must_use]
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
            enabled: true,
        }
    }

    /// Creates a no-op cache (for when response caching is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: DEFAULT_TTL,
            clock: Arc::new(SystemClock),
            enabled: false,
        }
    }

    /// Number of stored entries, fresh and stale alike.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns `true` if no entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[async_trait]
impl CacheInterface for MemoryCache {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn get_raw(&self, key: &str) -> HrResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }

        let now = self.clock.now();
        let entries = self.entries.lock();

        // A stale entry is reported as a miss but left in place; it is only
        // ever removed by being overwritten.
        let value = entries
            .get(key)
            .filter(|entry| now.duration_since(entry.created_at) < self.ttl)
            .map(|entry| entry.value.clone());

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str) -> HrResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = CacheEntry {
            value: value.to_string(),
            created_at: self.clock.now(),
        };
        self.entries.lock().insert(key.to_string(), entry);

        debug!("Cached key '{}' with TTL {}s", key, self.ttl.as_secs());
        Ok(())
    }
}
