//! HTTP inbound adapter exposing the gateway's REST endpoints.

pub mod accounts;
pub mod error;
pub mod health;
pub mod state;
pub mod tenants;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register tenant and account handlers plus the payload error handlers.
///
/// Health probes are registered separately because they carry their own
/// state.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use auth_gateway::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(validation::query_error_handler))
        .service(tenants::create_tenant)
        .service(tenants::delete_tenant)
        .service(tenants::list_tenants)
        .service(accounts::sign_up)
        .service(accounts::login)
        .service(accounts::verify);
}
