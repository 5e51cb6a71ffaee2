//! Tenant lifecycle handlers.
//!
//! ```text
//! POST /create-tenant {"name":"acme"}
//! DELETE /delete-tenant?tenantId=acme-x1y2z
//! GET /list-tenants
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Tenant, TenantId, TenantName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_tenant_error;

/// Request body for `POST /create-tenant`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenantRequest {
    #[serde(default)]
    #[schema(example = "acme")]
    pub name: String,
}

/// Query string for `DELETE /delete-tenant`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DeleteTenantQuery {
    /// Tenant to delete.
    #[serde(default)]
    pub tenant_id: String,
}

/// Tenant as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantBody {
    #[schema(example = "acme-x1y2z")]
    pub tenant_id: String,
    #[schema(example = "acme")]
    pub display_name: String,
    pub password_sign_in_allowed: bool,
    pub email_link_sign_in_enabled: bool,
}

impl From<Tenant> for TenantBody {
    fn from(tenant: Tenant) -> Self {
        Self {
            tenant_id: tenant.tenant_id().to_string(),
            display_name: tenant.display_name().to_owned(),
            password_sign_in_allowed: tenant.password_sign_in_allowed(),
            email_link_sign_in_enabled: tenant.email_link_sign_in_enabled(),
        }
    }
}

/// Create a tenant and provision its infrastructure.
#[utoipa::path(
    post,
    path = "/create-tenant",
    request_body = CreateTenantRequest,
    responses(
        (status = 200, description = "Tenant created and provisioned", body = TenantBody),
        (status = 400, description = "Name missing or blank", body = Error),
        (status = 500, description = "Tenant admin or provisioning failed", body = Error),
        (status = 503, description = "Tenant admin API unreachable", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "createTenant"
)]
#[post("/create-tenant")]
pub async fn create_tenant(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTenantRequest>,
) -> ApiResult<web::Json<TenantBody>> {
    let name = TenantName::new(&payload.name).map_err(map_tenant_error)?;
    let tenant = state.tenants.create_tenant(&name).await?;
    Ok(web::Json(tenant.into()))
}

/// Delete a tenant by identifier.
#[utoipa::path(
    delete,
    path = "/delete-tenant",
    params(DeleteTenantQuery),
    responses(
        (status = 204, description = "Tenant deleted"),
        (status = 400, description = "tenantId missing or blank", body = Error),
        (status = 404, description = "Tenant unknown", body = Error),
        (status = 500, description = "Tenant admin API failed", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "deleteTenant"
)]
#[delete("/delete-tenant")]
pub async fn delete_tenant(
    state: web::Data<HttpState>,
    query: web::Query<DeleteTenantQuery>,
) -> ApiResult<HttpResponse> {
    let tenant_id = TenantId::new(&query.tenant_id).map_err(map_tenant_error)?;
    state.tenants.delete_tenant(&tenant_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List every tenant across all admin API pages.
#[utoipa::path(
    get,
    path = "/list-tenants",
    responses(
        (status = 200, description = "All tenants in admin API order", body = [TenantBody]),
        (status = 500, description = "Tenant admin API failed", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "listTenants"
)]
#[get("/list-tenants")]
pub async fn list_tenants(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<TenantBody>>> {
    let tenants = state.tenants.list_tenants().await?;
    Ok(web::Json(tenants.into_iter().map(TenantBody::from).collect()))
}

#[cfg(test)]
#[path = "tenants_tests.rs"]
mod tests;
