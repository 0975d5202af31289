use std::sync::Arc;

use crate::domain::{PostDraft, ScanReport};
use crate::error::DomainError;
use crate::ports::DiagnosisEngine;

use super::DraftStore;

/// Runs leaf analysis and carries results into the post editor.
pub struct ScanService {
    engine: Arc<dyn DiagnosisEngine>,
    drafts: Arc<DraftStore>,
}

impl ScanService {
    pub fn new(engine: Arc<dyn DiagnosisEngine>, drafts: Arc<DraftStore>) -> Self {
        Self { engine, drafts }
    }

    /// Diagnose `image`. When `scope` is given the result is stashed so later
    /// steps (save to history, draft a post) can pick it up.
    pub async fn scan(&self, scope: Option<&str>, image: &str) -> Result<ScanReport, DomainError> {
        if image.trim().is_empty() {
            return Err(DomainError::Validation("An image is required".to_string()));
        }

        let result = self.engine.analyze(image).await?;
        tracing::info!(
            plant = %result.plant_name,
            diagnosis = %result.diagnosis,
            confidence = result.confidence,
            "Scan completed"
        );

        if let Some(scope) = scope {
            self.drafts.stash_scan_result(scope, &result).await?;
        }

        Ok(ScanReport::from(result))
    }

    /// Turn the stashed scan result into a post draft and stash the draft.
    pub async fn draft_post(&self, scope: &str) -> Result<PostDraft, DomainError> {
        let result = self
            .drafts
            .scan_result(scope)
            .await?
            .ok_or_else(|| DomainError::not_found("ScanResult", scope))?;

        let draft = PostDraft::from(&result);
        self.drafts.stash_post_draft(scope, &draft).await?;
        Ok(draft)
    }
}
