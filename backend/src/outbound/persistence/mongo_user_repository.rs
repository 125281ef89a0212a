//! MongoDB-backed `UserRepository` implementation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ReturnDocument;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserChanges, UserDraft, UserId};

use super::documents::{UserDocument, id_filter, set_document};
use super::store_client::StoreClient;

/// Repository storing users in the `users` collection.
#[derive(Clone, Debug)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Create a repository over the shared store client.
    pub fn new(store: &StoreClient) -> Self {
        Self {
            users: store.users(),
        }
    }
}

/// Classify driver failures into connection and query errors.
fn map_mongo_error(error: MongoError) -> UserPersistenceError {
    debug!(kind = ?error.kind, "mongodb operation failed");
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::Authentication { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => {
            UserPersistenceError::connection("document store connection error")
        }
        _ => UserPersistenceError::query("document store query error"),
    }
}

fn into_domain(document: Option<UserDocument>) -> Result<Option<User>, UserPersistenceError> {
    document.map(UserDocument::into_domain).transpose()
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let documents: Vec<UserDocument> = self
            .users
            .find(doc! {})
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;
        debug!(count = documents.len(), "listed users");
        documents
            .into_iter()
            .map(UserDocument::into_domain)
            .collect()
    }

    async fn insert(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let document = UserDocument::from_draft(draft);
        self.users
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;
        debug!(id = %document.id, "inserted user");
        document.into_domain()
    }

    async fn update(
        &self,
        id: &UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let filter = id_filter(id)?;
        let document = if changes.is_empty() {
            self.users.find_one(filter).await
        } else {
            self.users
                .find_one_and_update(filter, set_document(changes))
                .return_document(ReturnDocument::After)
                .await
        }
        .map_err(map_mongo_error)?;
        debug!(%id, found = document.is_some(), "updated user");
        into_domain(document)
    }

    async fn delete(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let document = self
            .users
            .find_one_and_delete(id_filter(id)?)
            .await
            .map_err(map_mongo_error)?;
        debug!(%id, found = document.is_some(), "deleted user");
        into_domain(document)
    }
}
