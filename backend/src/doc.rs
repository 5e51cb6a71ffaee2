//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every tenant, account and health endpoint together
//! with the error envelope schema. Swagger UI serves it in debug builds and
//! `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::accounts::{CredentialsRequest, SessionBody};
use crate::inbound::http::tenants::{CreateTenantRequest, TenantBody};

/// Document the ID token header accepted by `POST /verify`.
struct IdTokenAddon;

impl utoipa::Modify for IdTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "IdToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-Id-Token",
                "Client ID token; the header name is configurable.",
            ))),
        );
    }
}

/// OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    modifiers(&IdTokenAddon),
    info(
        title = "Authentication gateway API",
        description = "Tenant lifecycle, end-user sign-up, login and ID token verification."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tenants::create_tenant,
        crate::inbound::http::tenants::delete_tenant,
        crate::inbound::http::tenants::list_tenants,
        crate::inbound::http::accounts::sign_up,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::verify,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CreateTenantRequest,
        TenantBody,
        CredentialsRequest,
        SessionBody
    )),
    tags(
        (name = "tenants", description = "Tenant lifecycle and provisioning"),
        (name = "accounts", description = "End-user authentication"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
