//! Driving port for sign-up, login and token verification.
//!
//! Inbound adapters call it with validated credentials and never see the
//! identity provider's wire format.

use async_trait::async_trait;

use crate::domain::{Error, IdToken, UserCredentials, UserSession};

/// Use-case port for end-user authentication flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Register a new user in the caller's tenant.
    async fn sign_up(&self, credentials: &UserCredentials) -> Result<UserSession, Error>;

    /// Exchange credentials for a session.
    ///
    /// Any non-200 provider status yields `Ok(None)`; only transport failures
    /// and unusable success bodies are errors.
    async fn login(&self, credentials: &UserCredentials) -> Result<Option<UserSession>, Error>;

    /// Ask the provider to validate `id_token`.
    async fn verify(&self, id_token: &IdToken) -> Result<(), Error>;
}
