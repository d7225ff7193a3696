//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use hrmetrics_core::HrResult;

/// Cache interface for storing and retrieving cached response data.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
/// The freshness window is fixed per cache instance at construction; there is
/// no per-key TTL override. A miss is a normal outcome, never an error: the
/// only errors these methods can surface are serialization failures in the
/// typed extension below.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or its entry has gone stale.
    async fn get_raw(&self, key: &str) -> HrResult<Option<String>>;

    /// Store a raw JSON value, unconditionally overwriting any existing entry
    /// for the key and stamping it with the current time.
    async fn set_raw(&self, key: &str, value: &str) -> HrResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> HrResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(&self, key: &str, value: &T) -> HrResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json).await
    }

    /// Get a value or compute and cache it if no fresh entry exists.
    ///
    /// The factory runs only on a miss, and its result is stored only when it
    /// resolves `Ok` - a failed fetch propagates unchanged and leaves the
    /// cache untouched. There is no in-flight de-duplication: concurrent
    /// misses for the same key each run the factory, and the last completed
    /// write wins. That is safe because `set` is a total overwrite.
    async fn get_or_set<T, F, Fut>(&self, key: &str, factory: F) -> HrResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = HrResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            return Ok(cached);
        }

        let value = factory().await?;

        // Cache it (a storage error never invalidates the freshly computed value)
        let _ = self.set(key, &value).await;

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
