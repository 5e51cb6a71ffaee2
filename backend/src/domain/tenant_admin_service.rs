//! Tenant administration domain service.
//!
//! Implements the [`TenantAdministrator`] driving port over the
//! [`TenantDirectory`] and [`ProvisioningTrigger`] driven ports. Creating a
//! tenant is a two-step saga without compensation: the tenant record is kept
//! when provisioning fails and the failure names it for operator follow-up.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::ports::{
    ProvisioningError, ProvisioningRequest, ProvisioningTrigger, TenantAdministrator,
    TenantDirectory, TenantDirectoryError,
};
use crate::domain::{Error, Tenant, TenantCreateRequest, TenantId, TenantName};

/// Tenant administration service implementing the driving port.
#[derive(Clone)]
pub struct TenantAdministrationService<D: ?Sized, P: ?Sized> {
    directory: Arc<D>,
    provisioner: Arc<P>,
}

impl<D: ?Sized, P: ?Sized> TenantAdministrationService<D, P> {
    /// Create a new service with the given collaborators.
    pub fn new(directory: Arc<D>, provisioner: Arc<P>) -> Self {
        Self {
            directory,
            provisioner,
        }
    }
}

fn map_directory_error(error: TenantDirectoryError) -> Error {
    match error {
        TenantDirectoryError::NotFound { tenant_id } => {
            Error::not_found(format!("tenant {tenant_id} not found"))
                .with_details(json!({ "tenantId": tenant_id }))
        }
        TenantDirectoryError::Transport { message } => {
            Error::service_unavailable(format!("tenant admin API unavailable: {message}"))
        }
        TenantDirectoryError::Timeout { message } => {
            Error::service_unavailable(format!("tenant admin API timed out: {message}"))
        }
        TenantDirectoryError::Rejected { status, message } => Error::internal(format!(
            "tenant admin API rejected request with status {status}: {message}"
        )),
        TenantDirectoryError::Decode { message } => {
            Error::internal(format!("tenant admin API response unusable: {message}"))
        }
    }
}

fn provisioning_failed(tenant: &Tenant, cause: &ProvisioningError) -> Error {
    Error::internal(format!(
        "provisioning failed for tenant {}: {cause}",
        tenant.tenant_id()
    ))
    .with_details(json!({
        "reason": "provisioning_failed",
        "tenantId": tenant.tenant_id().as_ref(),
    }))
}

#[async_trait]
impl<D, P> TenantAdministrator for TenantAdministrationService<D, P>
where
    D: TenantDirectory + ?Sized,
    P: ProvisioningTrigger + ?Sized,
{
    async fn create_tenant(&self, name: &TenantName) -> Result<Tenant, Error> {
        let request = TenantCreateRequest::new(name.clone());
        let tenant = self
            .directory
            .create_tenant(&request)
            .await
            .map_err(map_directory_error)?;
        info!(
            tenant_id = %tenant.tenant_id(),
            display_name = tenant.display_name(),
            "tenant created"
        );

        let provisioning = ProvisioningRequest::new(name);
        if let Err(cause) = self.provisioner.apply(&provisioning).await {
            error!(
                tenant_id = %tenant.tenant_id(),
                tenant_name = provisioning.tenant_name(),
                error = %cause,
                "tenant provisioning failed; tenant record retained"
            );
            return Err(provisioning_failed(&tenant, &cause));
        }
        info!(tenant_id = %tenant.tenant_id(), "tenant provisioned");
        Ok(tenant)
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, Error> {
        let mut tenants = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self
                .directory
                .list_tenants(page_token.clone())
                .await
                .map_err(map_directory_error)?;
            tenants.extend(page.tenants);
            let Some(next) = page.next_page_token.filter(|token| !token.is_empty()) else {
                break;
            };
            if !seen_tokens.insert(next.clone()) {
                warn!(page_token = next.as_str(), "tenant listing revisited a page token");
                return Err(Error::internal(format!(
                    "tenant admin API repeated page token {next}"
                )));
            }
            page_token = Some(next);
        }
        Ok(tenants)
    }

    async fn delete_tenant(&self, tenant_id: &TenantId) -> Result<(), Error> {
        self.directory
            .delete_tenant(tenant_id)
            .await
            .map_err(map_directory_error)?;
        info!(tenant_id = %tenant_id, "tenant deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tenant_admin_service_tests.rs"]
mod tests;
