//! Driven port for the tenancy admin API.
//!
//! The admin API acts with service-level authority, so no tenant-scoped
//! credentials flow through this port. Listing is paginated; draining pages
//! into one sequence is the domain's job.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Tenant, TenantCreateRequest, TenantId};

/// One page of tenants returned by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenantPage {
    /// Tenants in the order the admin API yielded them.
    pub tenants: Vec<Tenant>,
    /// Token for the following page; `None` on the last page.
    pub next_page_token: Option<String>,
}

define_port_error! {
    /// Failures surfaced by the tenancy admin adapter.
    pub enum TenantDirectoryError {
        /// Network failure before a response arrived.
        Transport { message: String } =>
            "tenant admin transport failed: {message}",
        /// The admin call exceeded its timeout.
        Timeout { message: String } =>
            "tenant admin timed out: {message}",
        /// The admin API does not know the tenant.
        NotFound { tenant_id: String } =>
            "tenant {tenant_id} not found",
        /// The admin API answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "tenant admin rejected request with status {status}: {message}",
        /// The admin API response could not be decoded.
        Decode { message: String } =>
            "tenant admin response decode failed: {message}",
    }
}

/// Port for tenant lifecycle operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// Create a tenant and return the provider's record for it.
    async fn create_tenant(
        &self,
        request: &TenantCreateRequest,
    ) -> Result<Tenant, TenantDirectoryError>;

    /// Delete the tenant with `tenant_id`.
    async fn delete_tenant(&self, tenant_id: &TenantId) -> Result<(), TenantDirectoryError>;

    /// Fetch one page of tenants, starting at `page_token` when given.
    async fn list_tenants(
        &self,
        page_token: Option<String>,
    ) -> Result<TenantPage, TenantDirectoryError>;
}
