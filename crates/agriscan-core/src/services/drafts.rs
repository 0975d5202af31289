use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::domain::{PostDraft, ScanResult};
use crate::error::DomainError;
use crate::ports::KeyValueStore;

use super::{documents, keys};

/// Short-lived payloads handed from one step of the scan flow to the next.
/// Entries expire after `ttl`; a post draft is consumed when read.
pub struct DraftStore {
    store: Arc<dyn KeyValueStore>,
    ttl: Option<Duration>,
    take_lock: Mutex<()>,
}

impl DraftStore {
    pub fn new(store: Arc<dyn KeyValueStore>, ttl: Option<Duration>) -> Self {
        Self {
            store,
            ttl,
            take_lock: Mutex::new(()),
        }
    }

    pub async fn stash_scan_result(
        &self,
        scope: &str,
        result: &ScanResult,
    ) -> Result<(), DomainError> {
        documents::write(
            self.store.as_ref(),
            &keys::scan_result(scope),
            result,
            self.ttl,
        )
        .await?;
        Ok(())
    }

    /// The latest stashed scan result. Reading does not consume it.
    pub async fn scan_result(&self, scope: &str) -> Result<Option<ScanResult>, DomainError> {
        Ok(documents::read(self.store.as_ref(), &keys::scan_result(scope)).await?)
    }

    pub async fn stash_post_draft(&self, scope: &str, draft: &PostDraft) -> Result<(), DomainError> {
        documents::write(
            self.store.as_ref(),
            &keys::post_draft(scope),
            draft,
            self.ttl,
        )
        .await?;
        Ok(())
    }

    /// Read and remove the stashed post draft.
    pub async fn take_post_draft(&self, scope: &str) -> Result<Option<PostDraft>, DomainError> {
        let _guard = self.take_lock.lock().await;

        let key = keys::post_draft(scope);
        let draft: Option<PostDraft> = documents::read(self.store.as_ref(), &key).await?;
        if draft.is_some() {
            self.store.delete(&key).await?;
        }
        Ok(draft)
    }
}
