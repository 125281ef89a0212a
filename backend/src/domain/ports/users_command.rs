//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserChanges, UserDraft, UserId};

/// Domain use-case port for creating, updating and deleting users.
///
/// Update and delete report a missing user as `Ok(None)`; adapters decide
/// how to render that outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user and return it with its assigned identifier.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Apply `changes` to the user and return the post-update document.
    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<Option<User>, Error>;

    /// Delete the user and return the removed document.
    async fn delete_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
