use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthorSnapshot;

/// A comment on a post. Comments are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: AuthorSnapshot,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(author: AuthorSnapshot, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            content,
            created_at: Utc::now(),
        }
    }
}
