//! # AgriScan Infrastructure
//!
//! Concrete implementations of the ports defined in `agriscan-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `auth` - JWT + Argon2 authentication
//! - `redis` - Redis-backed key-value storage

pub mod diagnosis;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use diagnosis::{MockDiagnosisConfig, MockDiagnosisEngine};
pub use storage::InMemoryStore;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use storage::{RedisConfig, RedisStore};
