//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on the
//! driving ports and stay testable without network I/O.

use std::sync::Arc;

use actix_web::http::header::HeaderName;

use crate::domain::ports::{IdentityGateway, TenantAdministrator};

/// Header carrying the client ID token on `POST /verify` unless configured.
pub const DEFAULT_ID_TOKEN_HEADER: &str = "x-id-token";

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tenants: Arc<dyn TenantAdministrator>,
    pub identity: Arc<dyn IdentityGateway>,
    pub id_token_header: HeaderName,
}

impl HttpState {
    /// Construct state using the default ID token header.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use auth_gateway::domain::ports::{IdentityGateway, TenantAdministrator};
    /// use auth_gateway::inbound::http::state::HttpState;
    ///
    /// fn build(
    ///     tenants: Arc<dyn TenantAdministrator>,
    ///     identity: Arc<dyn IdentityGateway>,
    /// ) -> HttpState {
    ///     HttpState::new(tenants, identity)
    /// }
    /// ```
    pub fn new(tenants: Arc<dyn TenantAdministrator>, identity: Arc<dyn IdentityGateway>) -> Self {
        Self {
            tenants,
            identity,
            id_token_header: HeaderName::from_static(DEFAULT_ID_TOKEN_HEADER),
        }
    }

    /// Override the header `POST /verify` reads the ID token from.
    pub fn with_id_token_header(mut self, header: HeaderName) -> Self {
        self.id_token_header = header;
        self
    }
}
