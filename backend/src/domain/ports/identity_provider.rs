//! Driven port for the password-based identity provider REST API.
//!
//! The adapter owns transport only: it posts a JSON payload to one of the
//! provider's account endpoints and hands back the raw status and body. The
//! domain interprets the response so the status policy lives in one place.

use async_trait::async_trait;
use serde_json::Value;

use super::define_port_error;

/// Identity provider account endpoints used by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityEndpoint {
    /// `accounts:signUp`
    SignUp,
    /// `accounts:signInWithPassword`
    SignInWithPassword,
    /// `accounts:lookup`
    Lookup,
}

impl IdentityEndpoint {
    /// Path segment appended to the provider base URL.
    ///
    /// # Examples
    /// ```
    /// use auth_gateway::domain::ports::IdentityEndpoint;
    ///
    /// assert_eq!(IdentityEndpoint::Lookup.path_segment(), "accounts:lookup");
    /// ```
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::SignUp => "accounts:signUp",
            Self::SignInWithPassword => "accounts:signInWithPassword",
            Self::Lookup => "accounts:lookup",
        }
    }
}

/// Raw provider response: status code plus undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ProviderResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

define_port_error! {
    /// Transport-level failures talking to the identity provider.
    ///
    /// These never describe a provider verdict; a response with any status
    /// code is returned as [`ProviderResponse`].
    pub enum IdentityProviderError {
        /// DNS, connect or I/O failure before a full response arrived.
        Transport { message: String } =>
            "identity provider transport failed: {message}",
        /// The per-endpoint timeout elapsed.
        Timeout { message: String } =>
            "identity provider timed out: {message}",
    }
}

/// Port for posting JSON payloads to the identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// POST `payload` to `endpoint` and return the provider's raw response.
    async fn post(
        &self,
        endpoint: IdentityEndpoint,
        payload: &Value,
    ) -> Result<ProviderResponse, IdentityProviderError>;
}
