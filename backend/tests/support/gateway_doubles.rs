//! In-memory driven-port doubles shared by behaviour suites.
//!
//! mockall doubles are compiled only for unit tests, so integration suites
//! use these hand-written fakes instead.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use auth_gateway::domain::ports::{
    IdentityEndpoint, IdentityProviderClient, IdentityProviderError, ProviderResponse,
    ProvisioningError, ProvisioningRequest, ProvisioningTrigger, TenantDirectory,
    TenantDirectoryError, TenantPage,
};
use auth_gateway::domain::{Tenant, TenantCreateRequest, TenantId};
use serde_json::Value;

/// Tenant directory that serves one tenant per page.
#[derive(Default)]
pub struct InMemoryTenantDirectory {
    tenants: Mutex<Vec<Tenant>>,
    create_calls: AtomicUsize,
}

impl InMemoryTenantDirectory {
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    fn tenants(&self) -> std::sync::MutexGuard<'_, Vec<Tenant>> {
        self.tenants
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl TenantDirectory for InMemoryTenantDirectory {
    async fn create_tenant(
        &self,
        request: &TenantCreateRequest,
    ) -> Result<Tenant, TenantDirectoryError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let name = request.display_name().as_ref();
        let tenant_id = TenantId::new(format!("{name}-0001"))
            .map_err(|err| TenantDirectoryError::decode(err.to_string()))?;
        let tenant = Tenant::new(
            tenant_id,
            name,
            request.password_sign_in_allowed(),
            request.email_link_sign_in_enabled(),
        );
        self.tenants().push(tenant.clone());
        Ok(tenant)
    }

    async fn delete_tenant(&self, tenant_id: &TenantId) -> Result<(), TenantDirectoryError> {
        let mut tenants = self.tenants();
        let before = tenants.len();
        tenants.retain(|tenant| tenant.tenant_id() != tenant_id);
        if tenants.len() == before {
            return Err(TenantDirectoryError::not_found(tenant_id.as_ref()));
        }
        Ok(())
    }

    async fn list_tenants(
        &self,
        page_token: Option<String>,
    ) -> Result<TenantPage, TenantDirectoryError> {
        let index = match page_token {
            Some(token) => token
                .parse::<usize>()
                .map_err(|err| TenantDirectoryError::rejected(400_u16, err.to_string()))?,
            None => 0,
        };
        let tenants = self.tenants();
        let page: Vec<Tenant> = tenants.iter().skip(index).take(1).cloned().collect();
        let next = index + 1;
        Ok(TenantPage {
            tenants: page,
            next_page_token: (next < tenants.len()).then(|| next.to_string()),
        })
    }
}

/// Provisioning trigger recording applied tenant names.
#[derive(Default)]
pub struct RecordingProvisioner {
    fail: AtomicBool,
    applied: Mutex<Vec<String>>,
}

impl RecordingProvisioner {
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn applied(&self) -> Vec<String> {
        self.applied
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ProvisioningTrigger for RecordingProvisioner {
    async fn apply(&self, request: &ProvisioningRequest) -> Result<(), ProvisioningError> {
        self.applied
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(request.tenant_name().to_owned());
        if self.fail.load(Ordering::SeqCst) {
            return Err(ProvisioningError::exited("exit status: 1"));
        }
        Ok(())
    }
}

/// Identity provider answering every call with one canned response.
#[derive(Default)]
pub struct ScriptedIdentityProvider {
    response: Mutex<Option<ProviderResponse>>,
    calls: AtomicUsize,
}

impl ScriptedIdentityProvider {
    pub fn respond_with(&self, response: ProviderResponse) {
        *self
            .response
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(response);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProviderClient for ScriptedIdentityProvider {
    async fn post(
        &self,
        _endpoint: IdentityEndpoint,
        _payload: &Value,
    ) -> Result<ProviderResponse, IdentityProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
            .ok_or_else(|| IdentityProviderError::transport("no scripted response"))
    }
}

/// Driven-port doubles wired into one gateway.
#[derive(Default, Clone)]
pub struct GatewayDoubles {
    pub directory: Arc<InMemoryTenantDirectory>,
    pub provisioner: Arc<RecordingProvisioner>,
    pub identity: Arc<ScriptedIdentityProvider>,
}
