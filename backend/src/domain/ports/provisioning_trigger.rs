//! Driven port for applying per-tenant infrastructure.
//!
//! Two adapters implement it: one runs the infrastructure tool as a local
//! process, the other calls a remote provisioning service. Configuration picks
//! one at startup.

use async_trait::async_trait;
use serde::Serialize;

use super::define_port_error;
use crate::domain::TenantName;

/// Payload describing which tenant to provision.
///
/// Serialises as `{"tenantName": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequest {
    tenant_name: String,
}

impl ProvisioningRequest {
    pub fn new(tenant_name: &TenantName) -> Self {
        Self {
            tenant_name: tenant_name.as_ref().to_owned(),
        }
    }

    pub fn tenant_name(&self) -> &str {
        self.tenant_name.as_str()
    }
}

define_port_error! {
    /// Reasons an infrastructure apply did not succeed.
    pub enum ProvisioningError {
        /// The provisioning process could not be started.
        Launch { message: String } =>
            "provisioning process could not start: {message}",
        /// The provisioning process exited unsuccessfully.
        Exited { status: String } =>
            "provisioning process failed: {status}",
        /// The provisioning service answered with a non-200 status.
        Rejected { status: u16, body: String } =>
            "provisioning service responded with status {status}: {body}",
        /// Network failure talking to the provisioning service.
        Transport { message: String } =>
            "provisioning transport failed: {message}",
        /// The apply did not finish before its timeout.
        Timeout { message: String } =>
            "provisioning timed out: {message}",
    }
}

/// Port applying infrastructure for a newly created tenant.
///
/// `Ok(())` means the apply fully succeeded; every other outcome is an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProvisioningTrigger: Send + Sync {
    /// Apply infrastructure for the tenant named in `request`.
    async fn apply(&self, request: &ProvisioningRequest) -> Result<(), ProvisioningError>;
}
