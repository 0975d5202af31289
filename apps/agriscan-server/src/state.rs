//! Application state - shared across all handlers.

use std::sync::Arc;

use agriscan_core::DomainError;
use agriscan_core::ports::{KeyValueStore, TokenService};
use agriscan_core::services::{ContentStore, DraftStore, ScanService, UserDirectory};
use agriscan_infra::{
    Argon2PasswordService, InMemoryStore, JwtTokenService, MockDiagnosisConfig,
    MockDiagnosisEngine, RedisStore,
};

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
    pub content: Arc<ContentStore>,
    pub drafts: Arc<DraftStore>,
    pub scans: Arc<ScanService>,
    pub tokens: Arc<dyn TokenService>,
    pub storage_backend: &'static str,
}

impl AppState {
    /// Connect the configured storage backend and build the services on top.
    pub async fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let store: Arc<dyn KeyValueStore> = match config.storage {
            StorageBackend::Memory => Arc::new(InMemoryStore::new()),
            StorageBackend::Redis => match RedisStore::new(config.redis.clone()).await {
                Ok(store) => Arc::new(store),
                Err(e) if config.redis.fallback_to_memory => {
                    tracing::error!(
                        error = %e,
                        "Failed to connect to Redis. Using in-memory fallback."
                    );
                    Arc::new(InMemoryStore::new())
                }
                Err(e) => return Err(e.into()),
            },
        };

        Self::with_store(store, config).await
    }

    /// Build the services over an already connected store.
    pub async fn with_store(
        store: Arc<dyn KeyValueStore>,
        config: &AppConfig,
    ) -> Result<Self, DomainError> {
        let users = Arc::new(UserDirectory::new(
            store.clone(),
            Arc::new(Argon2PasswordService::new()),
        ));
        let content = Arc::new(ContentStore::new(store.clone()));
        let drafts = Arc::new(DraftStore::new(store.clone(), config.draft_ttl));
        let engine = MockDiagnosisEngine::new(MockDiagnosisConfig {
            delay: config.scan_delay,
            seed: None,
        });
        let scans = Arc::new(ScanService::new(Arc::new(engine), drafts.clone()));

        if config.seed_demo_data {
            users.seed_demo_user().await?;
            content.seed_if_empty().await?;
        }

        tracing::info!(backend = store.backend(), "Application state initialized");

        Ok(Self {
            users,
            content,
            drafts,
            scans,
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            storage_backend: store.backend(),
        })
    }
}
