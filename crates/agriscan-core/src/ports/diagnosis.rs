use async_trait::async_trait;

use crate::domain::ScanResult;

/// Leaf image analysis.
#[async_trait]
pub trait DiagnosisEngine: Send + Sync {
    /// Diagnose the plant shown in `image` (a URL or data URI).
    async fn analyze(&self, image: &str) -> Result<ScanResult, DiagnosisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DiagnosisError {
    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl From<DiagnosisError> for crate::DomainError {
    fn from(err: DiagnosisError) -> Self {
        crate::DomainError::Internal(err.to_string())
    }
}
