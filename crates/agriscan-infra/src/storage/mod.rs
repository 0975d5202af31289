//! Key-value storage backends - Redis and in-memory.

mod memory;

#[cfg(feature = "redis")]
mod redis;

pub use memory::InMemoryStore;

#[cfg(feature = "redis")]
pub use self::redis::{RedisConfig, RedisStore};
