//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserChanges, UserDraft, UserId};

/// Repository keeping users in insertion order behind a mutex.
///
/// Identifiers are generated the same way the document store generates
/// them, so handler behaviour matches the store adapter.
///
/// # Examples
/// ```
/// use users_backend::domain::ports::UserRepository;
/// use users_backend::domain::UserDraft;
/// use users_backend::test_support::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::default();
/// let user = repo.insert(&UserDraft::default()).await.expect("insert");
/// assert_eq!(repo.list_all().await.expect("list"), vec![user]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Seed the repository with existing users.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.clone())
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let id = UserId::new(ObjectId::new().to_hex())
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        let user = User::new(id, draft.clone());
        self.lock()?.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.lock()?;
        Ok(users
            .iter_mut()
            .find(|user| user.id() == id)
            .map(|user| {
                user.apply(changes.clone());
                user.clone()
            }))
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut users = self.lock()?;
        Ok(users
            .iter()
            .position(|user| user.id() == id)
            .map(|index| users.remove(index)))
    }
}
