//! Injectable time source for the cache.

use std::time::Instant;

/// Time source for cache entry freshness checks.
///
/// Injected into [`MemoryCache`](super::MemoryCache) so tests can step time
/// across the TTL boundary without sleeping.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock backed implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
