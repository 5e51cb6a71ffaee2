//! Wire DTOs for the tenant management REST resource.

use serde::{Deserialize, Serialize};

use crate::domain::{Tenant, TenantCreateRequest, TenantId};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateTenantDto<'a> {
    pub(super) display_name: &'a str,
    pub(super) allow_password_signup: bool,
    pub(super) enable_email_link_signin: bool,
}

impl<'a> From<&'a TenantCreateRequest> for CreateTenantDto<'a> {
    fn from(request: &'a TenantCreateRequest) -> Self {
        Self {
            display_name: request.display_name().as_ref(),
            allow_password_signup: request.password_sign_in_allowed(),
            enable_email_link_signin: request.email_link_sign_in_enabled(),
        }
    }
}

/// Tenant resource; `name` is `projects/{project}/tenants/{tenantId}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TenantDto {
    pub(super) name: String,
    #[serde(default)]
    pub(super) display_name: String,
    #[serde(default)]
    pub(super) allow_password_signup: bool,
    #[serde(default)]
    pub(super) enable_email_link_signin: bool,
}

impl TenantDto {
    pub(super) fn into_domain(self) -> Result<Tenant, String> {
        let raw_id = self.name.rsplit('/').next().unwrap_or_default();
        let tenant_id = TenantId::new(raw_id)
            .map_err(|err| format!("tenant resource name {:?} is unusable: {err}", self.name))?;
        Ok(Tenant::new(
            tenant_id,
            self.display_name,
            self.allow_password_signup,
            self.enable_email_link_signin,
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListTenantsDto {
    #[serde(default)]
    pub(super) tenants: Vec<TenantDto>,
    #[serde(default)]
    pub(super) next_page_token: Option<String>,
}
