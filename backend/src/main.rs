//! Backend entry-point: loads settings, connects the store and serves HTTP.

mod server;

use actix_web::web;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_backend::inbound::http::health::HealthState;
use users_backend::settings::ServerSettings;

use server::{ServerConfig, connect_user_repository, create_server, drain_on_signal};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_env().map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(repository) = connect_user_repository(&health_state).await {
        config = config.with_user_repository(repository);
    }

    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on_signal(health_state, server.handle(), async {
        if let Err(e) = actix_web::rt::signal::ctrl_c().await {
            error!(error = %e, "shutdown signal listener failed");
            std::future::pending::<()>().await;
        }
    }));
    server.await
}
