use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::PublicUser;
use crate::error::DomainError;
use crate::ports::KeyValueStore;

use super::{UserDirectory, documents, keys};

/// Device-local session: the users collection plus a single "current user"
/// record persisted next to it.
///
/// Login and signup report rejected credentials or a taken email as `None`;
/// errors are reserved for storage faults and missing fields.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    users: Arc<UserDirectory>,
    current: RwLock<Option<PublicUser>>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, users: Arc<UserDirectory>) -> Self {
        Self {
            store,
            users,
            current: RwLock::new(None),
        }
    }

    /// Seed the demo account into an empty users collection, then restore the
    /// persisted session if there is one.
    pub async fn bootstrap(&self) -> Result<Option<PublicUser>, DomainError> {
        self.users.seed_demo_user().await?;

        let saved: Option<PublicUser> =
            documents::read(self.store.as_ref(), keys::CURRENT_USER).await?;
        if let Some(user) = &saved {
            tracing::debug!(user_id = %user.id, "Restored session");
        }

        *self.current.write().await = saved.clone();
        Ok(saved)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<PublicUser>, DomainError> {
        let Some(user) = self.users.register(name, email, password).await? else {
            return Ok(None);
        };
        self.establish(&user).await?;
        Ok(Some(user))
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<PublicUser>, DomainError> {
        let Some(user) = self.users.authenticate(email, password).await? else {
            tracing::debug!("Login rejected");
            return Ok(None);
        };
        self.establish(&user).await?;
        Ok(Some(user))
    }

    /// Clear the current session. The users collection is untouched.
    pub async fn logout(&self) -> Result<(), DomainError> {
        self.store.delete(keys::CURRENT_USER).await?;
        if let Some(user) = self.current.write().await.take() {
            tracing::info!(user_id = %user.id, "Logged out");
        }
        Ok(())
    }

    pub async fn current_user(&self) -> Option<PublicUser> {
        self.current.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Change the signed-in user's name and email, in both the session record
    /// and the users collection.
    pub async fn update_profile(&self, name: &str, email: &str) -> Result<PublicUser, DomainError> {
        let user_id = self
            .current_user()
            .await
            .map(|u| u.id)
            .ok_or(DomainError::Unauthorized)?;

        let updated = self.users.update_profile(&user_id, name, email).await?;
        self.establish(&updated).await?;
        Ok(updated)
    }

    async fn establish(&self, user: &PublicUser) -> Result<(), DomainError> {
        documents::write(self.store.as_ref(), keys::CURRENT_USER, user, None).await?;
        *self.current.write().await = Some(user.clone());
        tracing::info!(user_id = %user.id, "Session established");
        Ok(())
    }
}
