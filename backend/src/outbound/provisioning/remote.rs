//! Remote provisioning service adapter.
//!
//! Posts `{"tenantName": ...}` to `<base>/secure/apply` and waits for the
//! service to finish the apply. Only HTTP 200 counts as success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{info, warn};

use crate::domain::ports::{ProvisioningError, ProvisioningRequest, ProvisioningTrigger};
use crate::outbound::http_support::{body_preview, with_segments};

/// Provisioning trigger backed by a remote HTTP service.
pub struct RemoteProvisioningClient {
    client: Client,
    apply_url: Url,
    timeout: Duration,
}

impl RemoteProvisioningClient {
    /// Build the adapter over a shared reqwest client.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Transport`] when `base_url` cannot carry a
    /// path.
    pub fn new(client: Client, base_url: &Url, timeout: Duration) -> Result<Self, ProvisioningError> {
        let apply_url = with_segments(base_url, ["secure", "apply"]).ok_or_else(|| {
            ProvisioningError::transport(format!(
                "provisioning base URL {base_url} cannot carry a path"
            ))
        })?;
        Ok(Self {
            client,
            apply_url,
            timeout,
        })
    }
}

#[async_trait]
impl ProvisioningTrigger for RemoteProvisioningClient {
    async fn apply(&self, request: &ProvisioningRequest) -> Result<(), ProvisioningError> {
        let response = self
            .client
            .post(self.apply_url.clone())
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::OK {
            info!(tenant_name = request.tenant_name(), "remote provisioning succeeded");
            return Ok(());
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        let preview = body_preview(&body);
        warn!(
            tenant_name = request.tenant_name(),
            status = status.as_u16(),
            body = preview.as_str(),
            "remote provisioning failed"
        );
        Err(ProvisioningError::rejected(status.as_u16(), preview))
    }
}

fn map_transport_error(error: reqwest::Error) -> ProvisioningError {
    if error.is_timeout() {
        ProvisioningError::timeout(error.to_string())
    } else {
        ProvisioningError::transport(error.to_string())
    }
}
