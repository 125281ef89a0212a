//! MongoDB persistence adapters.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   BSON documents and domain types.
//! - **Internal documents**: the serde document shape (`documents.rs`) is an
//!   implementation detail never exposed to the domain layer.
//! - **Explicit client**: [`StoreClient`] is built once by the process entry
//!   point and handed to [`MongoUserRepository`]; there is no global
//!   connection state.
//! - **Strongly typed errors**: driver errors are classified into
//!   [`UserPersistenceError`](crate::domain::ports::UserPersistenceError)
//!   variants.
//!
//! # Example
//!
//! ```no_run
//! use users_backend::outbound::persistence::{MongoUserRepository, StoreClient};
//! use users_backend::settings::DatabaseSettings;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = DatabaseSettings::load_from_env()?;
//! let store = StoreClient::connect(&settings).await?;
//! let repo = MongoUserRepository::new(&store);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod disconnected_user_repository;
mod documents;
mod mongo_user_repository;
mod store_client;

pub use disconnected_user_repository::DisconnectedUserRepository;
pub use mongo_user_repository::MongoUserRepository;
pub use store_client::{
    AUTH_SOURCE, StoreBootstrapError, StoreClient, USERS_COLLECTION, connection_string,
};
