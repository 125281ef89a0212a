//! Fallback repository used when the store client could not be created.
//!
//! The process keeps serving HTTP so health checks and clients see a
//! `503` rather than a refused connection.

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserChanges, UserDraft, UserId};

const NOT_CONFIGURED: &str = "document store is not configured";

/// Repository whose every operation fails with a connection error.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedUserRepository;

#[async_trait]
impl UserRepository for DisconnectedUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Err(UserPersistenceError::connection(NOT_CONFIGURED))
    }

    async fn insert(&self, _draft: &UserDraft) -> Result<User, UserPersistenceError> {
        Err(UserPersistenceError::connection(NOT_CONFIGURED))
    }

    async fn update(
        &self,
        _id: &UserId,
        _changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        Err(UserPersistenceError::connection(NOT_CONFIGURED))
    }

    async fn delete(&self, _id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Err(UserPersistenceError::connection(NOT_CONFIGURED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> UserPersistenceError {
        UserPersistenceError::connection(NOT_CONFIGURED)
    }

    #[tokio::test]
    async fn every_operation_reports_a_connection_error() {
        let repo = DisconnectedUserRepository;
        let id = UserId::new("65f1c0ffee0000000000abcd").expect("valid id");

        assert_eq!(repo.list_all().await, Err(expected()));
        assert_eq!(repo.insert(&UserDraft::default()).await, Err(expected()));
        assert_eq!(
            repo.update(&id, &UserChanges::default()).await,
            Err(expected())
        );
        assert_eq!(repo.delete(&id).await, Err(expected()));
    }
}
