//! Randomized stand-in for a leaf classifier.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use agriscan_core::domain::ScanResult;
use agriscan_core::domain::remedies::{DIAGNOSES, PLANT_NAMES};
use agriscan_core::ports::{DiagnosisEngine, DiagnosisError};

/// Mock engine configuration.
#[derive(Debug, Clone)]
pub struct MockDiagnosisConfig {
    /// Artificial processing time before a result is returned.
    pub delay: Duration,
    /// Fixed RNG seed for reproducible results.
    pub seed: Option<u64>,
}

impl Default for MockDiagnosisConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(3000),
            seed: None,
        }
    }
}

/// Picks a random plant, diagnosis and a 92-98% confidence after a fixed delay.
/// It has no failure path.
pub struct MockDiagnosisEngine {
    delay: Duration,
    rng: Mutex<StdRng>,
}

impl MockDiagnosisEngine {
    pub fn new(config: MockDiagnosisConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            delay: config.delay,
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, image: &str) -> ScanResult {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        ScanResult {
            plant_name: PLANT_NAMES
                .choose(&mut *rng)
                .copied()
                .unwrap_or(PLANT_NAMES[0])
                .to_string(),
            diagnosis: DIAGNOSES
                .choose(&mut *rng)
                .copied()
                .unwrap_or(DIAGNOSES[0])
                .to_string(),
            confidence: rng.gen_range(92..=98),
            image: image.to_string(),
        }
    }
}

impl Default for MockDiagnosisEngine {
    fn default() -> Self {
        Self::new(MockDiagnosisConfig::default())
    }
}

#[async_trait]
impl DiagnosisEngine for MockDiagnosisEngine {
    async fn analyze(&self, image: &str) -> Result<ScanResult, DiagnosisError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = self.pick(image);
        tracing::debug!(
            plant = %result.plant_name,
            diagnosis = %result.diagnosis,
            "Mock diagnosis produced"
        );
        Ok(result)
    }
}
