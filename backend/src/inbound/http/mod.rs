//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

use actix_web::web;

pub use error::ApiResult;

/// Register the user routes, the JSON extractor policy and the JSON 404
/// fallback.
///
/// The caller provides [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use users_backend::inbound::http::{configure, state::HttpState};
/// use users_backend::outbound::persistence::DisconnectedUserRepository;
///
/// let state = HttpState::from_repository(Arc::new(DisconnectedUserRepository));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::list_users)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .default_service(web::to(error::not_found));
}
