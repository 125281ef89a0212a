//! User domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! a [`UserRepository`], translating persistence failures into domain
//! errors. No validation beyond the typed field set is applied.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserChanges, UserDraft, UserId};

/// User service implementing the driving ports.
///
/// `R` may be a trait object so the entry point can choose the adapter at
/// runtime.
pub struct UserService<R: ?Sized> {
    users_repo: Arc<R>,
}

impl<R: ?Sized> UserService<R> {
    /// Create a new service over the given repository.
    pub fn new(users_repo: Arc<R>) -> Self {
        Self { users_repo }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users_repo
            .list_all()
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self
            .users_repo
            .insert(&draft)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(
        &self,
        id: &UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, Error> {
        let updated = self
            .users_repo
            .update(id, &changes)
            .await
            .map_err(map_persistence_error)?;
        if updated.is_none() {
            debug!(user_id = %id, "update matched no user");
        }
        Ok(updated)
    }

    async fn delete_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        let deleted = self
            .users_repo
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if deleted.is_none() {
            debug!(user_id = %id, "delete matched no user");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
