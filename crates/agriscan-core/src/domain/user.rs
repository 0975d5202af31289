use serde::{Deserialize, Serialize};
use uuid::Uuid;

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// User entity - a registered account as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a new user with a generated ID and an avatar seeded by email.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let avatar = avatar_url(&email);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            avatar: Some(avatar),
        }
    }

    /// The public projection, without the password hash.
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// What the rest of the application sees of a user. Also the shape of the
/// current-session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl PublicUser {
    pub fn author(&self) -> AuthorSnapshot {
        AuthorSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone().unwrap_or_default(),
        }
    }
}

/// Author details copied onto posts and comments when they are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSnapshot {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl AuthorSnapshot {
    pub fn new(id: &str, name: &str, avatar: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

pub fn avatar_url(seed: &str) -> String {
    format!("{AVATAR_BASE}{seed}")
}
