//! Response caching for the service layer.
//!
//! Report payloads are expensive to recompute and change slowly, so every
//! report operation runs through an in-process cache with a single fixed
//! freshness window. The store is process-lifetime state: it starts empty,
//! is discarded on shutdown, and is never persisted.

mod cache_interface;
pub mod cache_keys;
mod clock;
mod memory_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use clock::{Clock, SystemClock};
pub use memory_cache::{MemoryCache, DEFAULT_TTL};
