use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::remedies;

/// Output of a leaf analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub plant_name: String,
    pub diagnosis: String,
    /// Confidence in percent.
    pub confidence: u8,
    pub image: String,
}

impl ScanResult {
    pub fn remedies(&self) -> Vec<String> {
        remedies::remedies_for(&self.diagnosis)
    }
}

/// A scan result together with the remedies suggested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(flatten)]
    pub result: ScanResult,
    pub remedies: Vec<String>,
}

impl From<ScanResult> for ScanReport {
    fn from(result: ScanResult) -> Self {
        let remedies = result.remedies();
        Self { result, remedies }
    }
}

/// A scan saved to a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanHistory {
    pub id: String,
    pub plant_name: String,
    pub diagnosis: String,
    pub image: String,
    pub remedies: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub posted_as_blog: bool,
}

impl ScanHistory {
    /// Build a history entry from a scan, with remedies from the catalogue.
    pub fn from_result(result: &ScanResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            plant_name: result.plant_name.clone(),
            diagnosis: result.diagnosis.clone(),
            image: result.image.clone(),
            remedies: result.remedies(),
            created_at: Utc::now(),
            posted_as_blog: false,
        }
    }
}

/// Prefilled post fields carried from a scan to the post editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub plant_name: String,
    pub diagnosis: String,
    pub image: String,
    pub remedies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<String>,
}

impl From<&ScanResult> for PostDraft {
    fn from(result: &ScanResult) -> Self {
        Self {
            plant_name: result.plant_name.clone(),
            diagnosis: result.diagnosis.clone(),
            image: result.image.clone(),
            remedies: result.remedies(),
            scan_id: None,
        }
    }
}
