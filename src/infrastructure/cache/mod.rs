//! Cache backends for single-assignment lookups.
//!
//! - `RedisCacheStore`: shared Redis instance, entries expire server-side
//! - `InMemoryCacheStore`: process-local map, entries expire on read

mod memory;
mod redis_store;

pub use self::memory::InMemoryCacheStore;
pub use self::redis_store::RedisCacheStore;
