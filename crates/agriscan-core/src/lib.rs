//! # AgriScan Core
//!
//! The domain layer of AgriScan: users and sessions, the community feed with
//! votes and comments, per-user scan history and the scan flow.
//! Storage, hashing and diagnosis are reached only through the traits in
//! [`ports`], so every service can run against an in-memory store.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DomainError, StoreError};
