//! Test doubles for the ports.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ScanResult;
use crate::error::StoreError;
use crate::ports::{AuthError, DiagnosisEngine, DiagnosisError, KeyValueStore, PasswordService};

/// HashMap-backed store that records the TTL of each write and never expires.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (String, Option<Duration>)>>,
}

impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).map(|(v, _)| v.clone())
    }

    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), None));
    }

    pub fn ttl_of(&self, key: &str) -> Option<Duration> {
        self.entries.lock().unwrap().get(key).and_then(|(_, ttl)| *ttl)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "test"
    }
}

/// Cheap reversible "hash" so tests don't pay for Argon2.
pub struct FakePasswordService;

impl PasswordService for FakePasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("fake${}", password.chars().rev().collect::<String>()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(self.hash(password)? == hash)
    }
}

/// Engine that always returns the same diagnosis.
pub struct FixedDiagnosisEngine {
    plant_name: String,
    diagnosis: String,
}

impl FixedDiagnosisEngine {
    pub fn new(plant_name: &str, diagnosis: &str) -> Self {
        Self {
            plant_name: plant_name.to_string(),
            diagnosis: diagnosis.to_string(),
        }
    }
}

#[async_trait]
impl DiagnosisEngine for FixedDiagnosisEngine {
    async fn analyze(&self, image: &str) -> Result<ScanResult, DiagnosisError> {
        Ok(ScanResult {
            plant_name: self.plant_name.clone(),
            diagnosis: self.diagnosis.clone(),
            confidence: 95,
            image: image.to_string(),
        })
    }
}
