//! User entity, identifier and field sets.
//!
//! `name` and `email` are free text: no format, length or uniqueness rules
//! apply. The only validated value is the identifier, which must be a
//! store-assigned object id (24 hexadecimal characters).

use std::fmt;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(
                f,
                "user id must be {USER_ID_LEN} hexadecimal characters"
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Length of a store-assigned identifier in its hexadecimal form.
pub const USER_ID_LEN: usize = 24;

/// Store-assigned user identifier, kept in lowercase hexadecimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use users_backend::domain::UserId;
    ///
    /// let id = UserId::new("65F1C0FFEE0000000000ABCD").expect("valid id");
    /// assert_eq!(id.as_ref(), "65f1c0ffee0000000000abcd");
    /// assert!(UserId::new("42").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.len() != USER_ID_LEN || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Field values for a user that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Partial overwrite applied by an update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    /// Whether the update touches no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Stored user document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: Option<String>,
    email: Option<String>,
}

impl User {
    /// Combine a stored identifier with the draft fields.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Overwrite the fields present in `changes`.
    ///
    /// # Examples
    /// ```
    /// use users_backend::domain::{User, UserChanges, UserDraft, UserId};
    ///
    /// let id = UserId::new("65f1c0ffee0000000000abcd").expect("valid id");
    /// let mut user = User::new(
    ///     id,
    ///     UserDraft { name: Some("Ann".into()), email: Some("a@x.com".into()) },
    /// );
    /// user.apply(UserChanges { name: Some("Ann2".into()), email: None });
    /// assert_eq!(user.name(), Some("Ann2"));
    /// assert_eq!(user.email(), Some("a@x.com"));
    /// ```
    pub fn apply(&mut self, changes: UserChanges) {
        let UserChanges { name, email } = changes;
        if name.is_some() {
            self.name = name;
        }
        if email.is_some() {
            self.email = email;
        }
    }
}
