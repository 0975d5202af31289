//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use agriscan_infra::{JwtConfig, RedisConfig};

/// Where the persisted documents live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Redis,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "redis" => Some(Self::Redis),
            _ => None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub redis: RedisConfig,
    /// Seed the demo account and feed into empty storage on startup.
    pub seed_demo_data: bool,
    /// Artificial processing time of the mock diagnosis engine.
    pub scan_delay: Duration,
    /// Lifetime of stashed scan results and post drafts. Zero disables expiry.
    pub draft_ttl: Option<Duration>,
    pub jwt: JwtConfig,
    /// Largest accepted JSON body. Leaf photos arrive inline as data URIs.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            storage: StorageBackend::Memory,
            redis: RedisConfig::default(),
            seed_demo_data: true,
            scan_delay: Duration::from_millis(3000),
            draft_ttl: Some(Duration::from_secs(1800)),
            jwt: JwtConfig::default(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => StorageBackend::parse(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Unknown STORAGE_BACKEND, using memory");
                StorageBackend::Memory
            }),
            Err(_) => defaults.storage,
        };

        let draft_ttl = match parse_var::<u64>("DRAFT_TTL_SECS") {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.draft_ttl,
        };

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            storage,
            redis: RedisConfig::from_env(),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.seed_demo_data),
            scan_delay: parse_var("SCAN_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.scan_delay),
            draft_ttl,
            jwt: JwtConfig::from_env(),
            max_body_bytes: parse_var("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|s| s.parse().ok())
}
