//! Port abstraction for user persistence adapters and their errors.
//!
//! Each method maps onto exactly one document store call. Lookups by an id
//! that matches no document return `Ok(None)` rather than an error.

use async_trait::async_trait;

use crate::domain::{User, UserChanges, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch every stored user, in store order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert a new user; the store assigns the identifier.
    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Overwrite the fields present in `changes` and return the updated user.
    ///
    /// Empty `changes` return the current document unchanged.
    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user and return the document as it was before deletion.
    async fn delete(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;
}
