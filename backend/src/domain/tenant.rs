//! Tenant primitives owned by the tenancy admin API.
//!
//! The gateway never persists tenants; it only holds these values for the
//! lifetime of one request.

use std::fmt;

/// Validation errors raised by tenant value objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenantValidationError {
    /// Tenant identifier was blank once trimmed.
    #[error("tenantId must not be empty")]
    EmptyTenantId,
    /// Tenant name was blank once trimmed.
    #[error("name must not be empty")]
    EmptyTenantName,
}

/// Provider-assigned tenant identifier.
///
/// # Examples
/// ```
/// use auth_gateway::domain::TenantId;
///
/// let id = TenantId::new("  acme-x1y2z  ").expect("valid id");
/// assert_eq!(id.as_ref(), "acme-x1y2z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantId(String);

impl TenantId {
    /// Validate and construct a tenant identifier, trimming whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TenantValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TenantValidationError::EmptyTenantId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TenantId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable tenant name chosen by the caller.
///
/// The name doubles as the infrastructure namespace during provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantName(String);

impl TenantName {
    /// Validate and construct a tenant name, trimming whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, TenantValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TenantValidationError::EmptyTenantName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TenantName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TenantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tenant creation request handed to the tenancy admin API.
///
/// ## Invariants
/// - Email-link and password sign-in are always enabled for new tenants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantCreateRequest {
    display_name: TenantName,
}

impl TenantCreateRequest {
    /// Build the creation request for `name`.
    pub fn new(display_name: TenantName) -> Self {
        Self { display_name }
    }

    /// Display name the tenant is created with.
    pub fn display_name(&self) -> &TenantName {
        &self.display_name
    }

    /// Whether email-link sign-in is requested.
    pub fn email_link_sign_in_enabled(&self) -> bool {
        true
    }

    /// Whether password sign-in is requested.
    pub fn password_sign_in_allowed(&self) -> bool {
        true
    }
}

/// Tenant as reported by the tenancy admin API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    tenant_id: TenantId,
    display_name: String,
    password_sign_in_allowed: bool,
    email_link_sign_in_enabled: bool,
}

impl Tenant {
    /// Construct a tenant record.
    pub fn new(
        tenant_id: TenantId,
        display_name: impl Into<String>,
        password_sign_in_allowed: bool,
        email_link_sign_in_enabled: bool,
    ) -> Self {
        Self {
            tenant_id,
            display_name: display_name.into(),
            password_sign_in_allowed,
            email_link_sign_in_enabled,
        }
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    pub fn password_sign_in_allowed(&self) -> bool {
        self.password_sign_in_allowed
    }

    pub fn email_link_sign_in_enabled(&self) -> bool {
        self.email_link_sign_in_enabled
    }
}
