//! Diagnosis engine implementations.

mod mock;

pub use mock::{MockDiagnosisConfig, MockDiagnosisEngine};
