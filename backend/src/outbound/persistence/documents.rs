//! BSON document shapes stored in the `users` collection.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{User, UserChanges, UserDraft, UserId};

/// Stored user document.
///
/// Extra fields written by other clients (for example a version key) are
/// ignored on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id")]
    pub(crate) id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
}

impl UserDocument {
    /// Prepare a new document with a freshly generated id.
    pub(crate) fn from_draft(draft: &UserDraft) -> Self {
        Self {
            id: ObjectId::new(),
            name: draft.name.clone(),
            email: draft.email.clone(),
        }
    }

    pub(crate) fn into_domain(self) -> Result<User, UserPersistenceError> {
        let Self { id, name, email } = self;
        let id = UserId::new(id.to_hex())
            .map_err(|err| UserPersistenceError::query(format!("stored id is invalid: {err}")))?;
        Ok(User::new(id, UserDraft { name, email }))
    }
}

/// Filter selecting the document with the given id.
pub(crate) fn id_filter(id: &UserId) -> Result<Document, UserPersistenceError> {
    let oid = ObjectId::parse_str(id.as_ref())
        .map_err(|err| UserPersistenceError::query(format!("id is not an object id: {err}")))?;
    Ok(doc! { "_id": oid })
}

/// `$set` body for the fields present in `changes`.
pub(crate) fn set_document(changes: &UserChanges) -> Document {
    let mut set = Document::new();
    if let Some(name) = &changes.name {
        set.insert("name", name.as_str());
    }
    if let Some(email) = &changes.email {
        set.insert("email", email.as_str());
    }
    doc! { "$set": set }
}
