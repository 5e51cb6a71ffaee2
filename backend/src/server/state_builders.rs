//! Builders wiring outbound adapters into the driving-port services.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use reqwest::Client;
use tracing::info;

use auth_gateway::domain::ports::{
    IdentityGateway, ProvisioningTrigger, TenantAdministrator,
};
use auth_gateway::domain::{IdentityGatewayService, TenantAdministrationService};
use auth_gateway::inbound::http::state::HttpState;
use auth_gateway::outbound::identity_toolkit::IdentityToolkitHttpClient;
use auth_gateway::outbound::provisioning::{LocalProcessProvisioner, RemoteProvisioningClient};
use auth_gateway::outbound::tenant_admin::IdentityPlatformTenantDirectory;
use auth_gateway::settings::{GatewayConfig, ProvisioningConfig};

const USER_AGENT: &str = concat!("auth-gateway/", env!("CARGO_PKG_VERSION"));

/// Build the single reqwest client shared by every outbound adapter.
pub(crate) fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .wrap_err("failed to build outbound HTTP client")
}

fn build_provisioner(
    client: &Client,
    config: &ProvisioningConfig,
) -> Result<Arc<dyn ProvisioningTrigger>> {
    match config {
        ProvisioningConfig::Remote { base_url, timeout } => {
            info!(url = %base_url, "using remote provisioning service");
            let remote = RemoteProvisioningClient::new(client.clone(), base_url, *timeout)
                .wrap_err("invalid provisioning service URL")?;
            Ok(Arc::new(remote))
        }
        ProvisioningConfig::Local(command) => {
            info!(
                binary = %command.binary.display(),
                working_dir = %command.working_dir.display(),
                "using local provisioning process"
            );
            Ok(Arc::new(LocalProcessProvisioner::new(command.clone())))
        }
    }
}

/// Build HTTP state from validated configuration and the shared client.
pub(crate) fn build_http_state(config: &GatewayConfig, client: &Client) -> Result<HttpState> {
    let identity_client = IdentityToolkitHttpClient::new(
        client.clone(),
        config.identity.base_url.clone(),
        config.identity.api_key.as_str(),
        config.identity.timeouts,
    );
    let identity: Arc<dyn IdentityGateway> =
        Arc::new(IdentityGatewayService::new(Arc::new(identity_client)));

    let directory =
        IdentityPlatformTenantDirectory::new(client.clone(), config.tenant_admin.clone())
            .wrap_err("invalid tenant admin URL")?;
    let provisioner = build_provisioner(client, &config.provisioning)?;
    let tenants: Arc<dyn TenantAdministrator> = Arc::new(TenantAdministrationService::new(
        Arc::new(directory),
        provisioner,
    ));

    Ok(HttpState::new(tenants, identity).with_id_token_header(config.id_token_header.clone()))
}
