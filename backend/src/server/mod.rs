//! Server construction and middleware wiring.

mod state_builders;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use auth_gateway::Trace;
#[cfg(debug_assertions)]
use auth_gateway::doc::ApiDoc;
use auth_gateway::inbound::http::configure;
use auth_gateway::inbound::http::health::{HealthState, live, ready};
use auth_gateway::inbound::http::state::HttpState;
use auth_gateway::settings::GatewayConfig;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::{build_http_client, build_http_state};

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server from validated configuration.
///
/// Readiness is flagged once the listener is bound and every adapter is
/// wired.
///
/// # Errors
/// Fails when an adapter cannot be built or the socket cannot be bound.
pub fn create_server(health_state: web::Data<HealthState>, config: GatewayConfig) -> Result<Server> {
    let client = build_http_client()?;
    let http_state = web::Data::new(build_http_state(&config, &client)?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(config.bind_addr)
        .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?
        .run();

    info!(bind_addr = %config.bind_addr, "auth gateway listening");
    health_state.mark_serving();
    Ok(server)
}
