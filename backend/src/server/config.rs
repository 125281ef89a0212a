//! HTTP server configuration object and helpers.

use std::sync::Arc;

use users_backend::domain::ports::UserRepository;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) user_repository: Option<Arc<dyn UserRepository>>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            user_repository: None,
        }
    }

    /// Attach the repository backing the user routes.
    ///
    /// Without one, every user route answers `503`.
    #[must_use]
    pub fn with_user_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.user_repository = Some(repository);
        self
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.bind_addr.0.as_str(), self.bind_addr.1)
    }
}
