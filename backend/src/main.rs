//! Gateway entry-point: loads configuration, wires adapters and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use auth_gateway::inbound::http::health::HealthState;
use auth_gateway::settings::{GatewayConfig, GatewaySettings};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = GatewaySettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let config = GatewayConfig::try_from(settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_draining();
    result?;
    Ok(())
}
