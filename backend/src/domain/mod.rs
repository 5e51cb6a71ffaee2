//! Domain primitives, ports and services.
//!
//! Purpose: define strongly typed values for tenants and end-user
//! authentication, the ports adapters plug into, and the services that turn
//! collaborator responses into domain outcomes. Types validate on
//! construction and stay immutable afterwards.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable identifier.
//! - Tenant, TenantId, TenantName, TenantCreateRequest: tenancy values.
//! - UserCredentials, IdToken, UserSession: authentication values.
//! - IdentityGatewayService, TenantAdministrationService: driving port
//!   implementations.

pub mod auth;
pub mod error;
mod identity_gateway_service;
pub mod ports;
pub mod tenant;
mod tenant_admin_service;
pub mod trace_id;

pub use self::auth::{
    CredentialsValidationError, EmptyIdToken, IdToken, UserCredentials, UserSession,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::identity_gateway_service::IdentityGatewayService;
pub use self::tenant::{Tenant, TenantCreateRequest, TenantId, TenantName, TenantValidationError};
pub use self::tenant_admin_service::TenantAdministrationService;
pub use self::trace_id::TraceId;
