use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::seed::{DEMO_USER_EMAIL, DEMO_USER_ID, DEMO_USER_NAME, DEMO_USER_PASSWORD};
use crate::domain::{PublicUser, User, avatar_url};
use crate::error::DomainError;
use crate::ports::{KeyValueStore, PasswordService};

use super::{documents, keys};

/// The registered-users collection.
///
/// Every mutation reads the whole `users` list, changes it and writes it back;
/// writes are serialized so concurrent callers in one process do not lose
/// each other's updates.
pub struct UserDirectory {
    store: Arc<dyn KeyValueStore>,
    passwords: Arc<dyn PasswordService>,
    write_lock: Mutex<()>,
}

impl UserDirectory {
    pub fn new(store: Arc<dyn KeyValueStore>, passwords: Arc<dyn PasswordService>) -> Self {
        Self {
            store,
            passwords,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn users(&self) -> Result<Vec<User>, DomainError> {
        Ok(documents::read_list(self.store.as_ref(), keys::USERS).await?)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<PublicUser>, DomainError> {
        let users = self.users().await?;
        Ok(users.iter().find(|u| u.id == id).map(User::public))
    }

    /// Seed the demo account when no users exist. Returns whether it seeded.
    pub async fn seed_demo_user(&self) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let users = self.users().await?;
        if !users.is_empty() {
            return Ok(false);
        }

        let demo = User {
            id: DEMO_USER_ID.to_string(),
            name: DEMO_USER_NAME.to_string(),
            email: DEMO_USER_EMAIL.to_string(),
            password_hash: self.passwords.hash(DEMO_USER_PASSWORD)?,
            avatar: Some(avatar_url(DEMO_USER_ID)),
        };
        documents::write(self.store.as_ref(), keys::USERS, &[demo], None).await?;

        tracing::info!(backend = self.store.backend(), "Seeded demo account");
        Ok(true)
    }

    /// Find the user whose email matches and whose password verifies.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<PublicUser>, DomainError> {
        tracing::debug!(user_email = %mask_email(email), "Authenticating user");

        let users = self.users().await?;
        for user in users.iter().filter(|u| u.email == email) {
            if self.passwords.verify(password, &user.password_hash)? {
                return Ok(Some(user.public()));
            }
        }

        Ok(None)
    }

    /// Register a new account. Returns `None` if the email is already taken,
    /// leaving the collection untouched.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Option<PublicUser>, DomainError> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Name, email and password are required".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut users = self.users().await?;
        if users.iter().any(|u| u.email == email) {
            tracing::debug!(user_email = %mask_email(email), "Signup rejected, email in use");
            return Ok(None);
        }

        let user = User::new(
            name.to_string(),
            email.to_string(),
            self.passwords.hash(password)?,
        );
        let public = user.public();
        users.push(user);
        documents::write(self.store.as_ref(), keys::USERS, &users, None).await?;

        tracing::info!(user_id = %public.id, user_email = %mask_email(email), "Registered user");
        Ok(Some(public))
    }

    /// Merge a new name and email into a user's record.
    pub async fn update_profile(
        &self,
        user_id: &str,
        name: &str,
        email: &str,
    ) -> Result<PublicUser, DomainError> {
        if name.trim().is_empty() || email.trim().is_empty() {
            return Err(DomainError::Validation(
                "Name and email are required".to_string(),
            ));
        }

        let _guard = self.write_lock.lock().await;

        let mut users = self.users().await?;
        if users.iter().any(|u| u.email == email && u.id != user_id) {
            return Err(DomainError::Duplicate(format!(
                "Email {} is already registered",
                mask_email(email)
            )));
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| DomainError::not_found("User", user_id))?;
        user.name = name.to_string();
        user.email = email.to_string();
        let public = user.public();

        documents::write(self.store.as_ref(), keys::USERS, &users, None).await?;

        tracing::info!(user_id = %user_id, "Updated profile");
        Ok(public)
    }
}

/// Mask the local part of an email to keep addresses out of logs.
pub(crate) fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            match local.chars().next() {
                Some(first) if local.chars().count() > 1 => format!("{first}***{domain}"),
                _ => format!("***{domain}"),
            }
        }
        None => "***".to_string(),
    }
}
