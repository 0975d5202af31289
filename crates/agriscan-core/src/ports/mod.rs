//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod diagnosis;
mod storage;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use diagnosis::{DiagnosisEngine, DiagnosisError};
pub use storage::KeyValueStore;
