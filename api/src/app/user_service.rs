//! User service
//!
//! Caller-facing operations on the user directory.

use std::sync::Arc;

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Remove every user. Destructive; meant for test isolation.
    pub async fn clear(&self) -> Result<(), DomainError> {
        tracing::warn!("Clearing all user data");
        self.users.clear().await
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DomainError> {
        tracing::debug!("Retrieving all users");
        self.users.get_all().await
    }

    pub async fn get_by_id(&self, id: UserId) -> Result<User, DomainError> {
        tracing::debug!("Retrieving user with ID: {}", id);
        self.users.get_by_id(id).await
    }

    pub async fn get_by_login_name(&self, login_name: &str) -> Result<User, DomainError> {
        tracing::debug!("Retrieving user with login name: {}", login_name);
        self.users.get_by_login_name(login_name).await
    }

    /// Create a user (no id) or update an existing one (id set)
    ///
    /// For updates the target must already exist; that is checked before the
    /// write so a stale id is always reported as `NotFound`. Uniqueness is left
    /// to the store and comes back as `Duplication`.
    pub async fn upsert(&self, user: &User) -> Result<User, DomainError> {
        match user.id {
            None => tracing::info!("Creating new user: {}", user.login_name),
            Some(id) => {
                tracing::info!("Updating user with ID: {}", id);
                self.users.get_by_id(id).await?;
            }
        }

        match self.users.upsert(user).await {
            Ok(upserted) => {
                if let Some(id) = upserted.id {
                    tracing::info!("Successfully upserted user with ID: {}", id);
                }
                Ok(upserted)
            }
            Err(e @ DomainError::Duplication { .. }) => {
                tracing::error!("Error upserting user '{}': {}", user.login_name, e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        tracing::info!("Trying to delete user with ID: {}", id);
        self.users.delete(id).await?;
        tracing::info!("Deleted user with ID: {}", id);
        Ok(())
    }
}
