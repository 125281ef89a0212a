//! Builders for the HTTP state and the store-backed user repository.

use std::sync::Arc;

use actix_web::web;
use tracing::{error, info};

use users_backend::domain::ports::UserRepository;
use users_backend::inbound::http::health::HealthState;
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::persistence::{
    DisconnectedUserRepository, MongoUserRepository, StoreBootstrapError, StoreClient,
};
use users_backend::settings::DatabaseSettings;

use super::ServerConfig;

/// Build the HTTP state, falling back to the disconnected repository.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = config
        .user_repository
        .clone()
        .unwrap_or_else(|| Arc::new(DisconnectedUserRepository));
    web::Data::new(HttpState::from_repository(repository))
}

/// Create the store client and start the background connectivity check.
///
/// Returns `None` when the settings are unusable; the failure is logged and
/// readiness is withdrawn.
pub async fn connect_user_repository(
    health_state: &web::Data<HealthState>,
) -> Option<Arc<dyn UserRepository>> {
    let store = match bootstrap_store().await {
        Ok(store) => store,
        Err(err) => {
            error!(error = %err, "store connection error");
            health_state.set_store_available(false);
            return None;
        }
    };

    let check_store = store.clone();
    let check_health = health_state.clone();
    actix_web::rt::spawn(async move {
        match check_store.ping().await {
            Ok(()) => {
                info!(database = check_store.database_name(), "store connected");
                check_health.set_store_available(true);
            }
            Err(err) => {
                error!(error = %err, "store connection error");
                check_health.set_store_available(false);
            }
        }
    });

    Some(Arc::new(MongoUserRepository::new(&store)))
}

async fn bootstrap_store() -> Result<StoreClient, BootstrapFailure> {
    let settings = DatabaseSettings::load_from_env().map_err(BootstrapFailure::Settings)?;
    Ok(StoreClient::connect(&settings).await?)
}

#[derive(Debug, thiserror::Error)]
enum BootstrapFailure {
    #[error("database settings could not be loaded: {0}")]
    Settings(String),
    #[error(transparent)]
    Store(#[from] StoreBootstrapError),
}
