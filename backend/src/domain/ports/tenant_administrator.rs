//! Driving port for tenant lifecycle use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Tenant, TenantId, TenantName};

/// Use-case port for creating, listing and deleting tenants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantAdministrator: Send + Sync {
    /// Create a tenant, then provision its infrastructure.
    ///
    /// A provisioning failure fails the call even though the tenant record
    /// already exists.
    async fn create_tenant(&self, name: &TenantName) -> Result<Tenant, Error>;

    /// List every tenant, draining all pages.
    async fn list_tenants(&self) -> Result<Vec<Tenant>, Error>;

    /// Delete the tenant with `tenant_id`.
    async fn delete_tenant(&self, tenant_id: &TenantId) -> Result<(), Error>;
}
