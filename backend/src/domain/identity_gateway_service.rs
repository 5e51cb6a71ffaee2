//! Identity gateway domain service.
//!
//! Implements the [`IdentityGateway`] driving port over the
//! [`IdentityProviderClient`] driven port. This is where provider status codes
//! become domain outcomes:
//!
//! | provider status | outcome |
//! |---|---|
//! | 200 | decode `{localId, idToken}` (sign-up, login) or accept (verify) |
//! | 400 with `{error:{message}}` | unauthorized, provider message forwarded |
//! | anything else | unauthorized, status only |
//!
//! Transport failures stay distinct and surface as service unavailable.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::domain::ports::{
    IdentityEndpoint, IdentityGateway, IdentityProviderClient, IdentityProviderError,
    ProviderResponse,
};
use crate::domain::{Error, IdToken, UserCredentials, UserSession};

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountBody {
    local_id: String,
    id_token: String,
}

/// Non-success provider answer after applying the status policy.
#[derive(Debug, PartialEq, Eq)]
enum ProviderRefusal {
    Rejected { message: String },
    Unavailable { status: u16 },
}

/// Split a raw response into the success body or a refusal.
fn classify(response: ProviderResponse) -> Result<Vec<u8>, ProviderRefusal> {
    match response.status {
        200 => Ok(response.body),
        400 => match rejection_message(&response.body) {
            Some(message) => Err(ProviderRefusal::Rejected { message }),
            None => Err(ProviderRefusal::Unavailable { status: 400 }),
        },
        status => Err(ProviderRefusal::Unavailable { status }),
    }
}

fn rejection_message(body: &[u8]) -> Option<String> {
    let decoded: ProviderErrorBody = serde_json::from_slice(body).ok()?;
    decoded
        .error
        .message
        .filter(|message| !message.trim().is_empty())
}

impl From<ProviderRefusal> for Error {
    fn from(refusal: ProviderRefusal) -> Self {
        match refusal {
            ProviderRefusal::Rejected { message } => {
                Error::unauthorized(format!("Message from identity provider: {message}"))
                    .with_details(json!({
                        "reason": "provider_rejected",
                        "providerMessage": message,
                    }))
            }
            ProviderRefusal::Unavailable { status } => {
                Error::unauthorized(format!("Response status from identity provider: {status}"))
                    .with_details(json!({
                        "reason": "provider_unavailable",
                        "providerStatus": status,
                    }))
            }
        }
    }
}

fn map_transport_error(endpoint: IdentityEndpoint, error: IdentityProviderError) -> Error {
    warn!(
        endpoint = endpoint.path_segment(),
        error = %error,
        "identity provider call failed"
    );
    match error {
        IdentityProviderError::Timeout { .. } => {
            Error::service_unavailable("identity provider timed out")
        }
        IdentityProviderError::Transport { .. } => {
            Error::service_unavailable("identity provider unavailable")
        }
    }
}

fn decode_session(
    body: &[u8],
    credentials: &UserCredentials,
) -> Result<UserSession, Error> {
    let account: AccountBody = serde_json::from_slice(body).map_err(|err| {
        Error::internal(format!("identity provider returned an unusable account body: {err}"))
    })?;
    let id_token = IdToken::new(account.id_token)
        .map_err(|err| Error::internal(format!("identity provider returned {err}")))?;
    if account.local_id.trim().is_empty() {
        return Err(Error::internal("identity provider returned an empty localId"));
    }
    Ok(UserSession::new(
        account.local_id,
        credentials.tenant_id().clone(),
        id_token,
    ))
}

fn credentials_payload(credentials: &UserCredentials) -> Value {
    json!({
        "email": credentials.email(),
        "password": credentials.password(),
        "tenantId": credentials.tenant_id().as_ref(),
    })
}

/// Identity gateway backed by an identity provider client.
#[derive(Clone)]
pub struct IdentityGatewayService<C: ?Sized> {
    client: Arc<C>,
}

impl<C: ?Sized> IdentityGatewayService<C> {
    /// Create the service over a shared provider client.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }
}

impl<C> IdentityGatewayService<C>
where
    C: IdentityProviderClient + ?Sized,
{
    async fn call(
        &self,
        endpoint: IdentityEndpoint,
        payload: &Value,
    ) -> Result<Result<Vec<u8>, ProviderRefusal>, Error> {
        let response = self
            .client
            .post(endpoint, payload)
            .await
            .map_err(|err| map_transport_error(endpoint, err))?;
        let status = response.status;
        if status != 200 {
            debug!(
                endpoint = endpoint.path_segment(),
                status,
                body = %String::from_utf8_lossy(&response.body),
                "identity provider error body"
            );
        }
        let outcome = classify(response);
        if outcome.is_err() {
            info!(
                endpoint = endpoint.path_segment(),
                status,
                "identity provider declined request"
            );
        }
        Ok(outcome)
    }
}

#[async_trait]
impl<C> IdentityGateway for IdentityGatewayService<C>
where
    C: IdentityProviderClient + ?Sized,
{
    async fn sign_up(&self, credentials: &UserCredentials) -> Result<UserSession, Error> {
        let payload = credentials_payload(credentials);
        let body = self.call(IdentityEndpoint::SignUp, &payload).await??;
        let session = decode_session(&body, credentials)?;
        info!(
            tenant_id = %session.tenant_id(),
            user_id = session.user_id(),
            "user signed up"
        );
        Ok(session)
    }

    async fn login(&self, credentials: &UserCredentials) -> Result<Option<UserSession>, Error> {
        let payload = credentials_payload(credentials);
        match self
            .call(IdentityEndpoint::SignInWithPassword, &payload)
            .await?
        {
            Ok(body) => decode_session(&body, credentials).map(Some),
            Err(_) => Ok(None),
        }
    }

    async fn verify(&self, id_token: &IdToken) -> Result<(), Error> {
        let payload = json!({ "idToken": id_token.expose() });
        self.call(IdentityEndpoint::Lookup, &payload).await??;
        info!(token = %id_token.fingerprint(), "id token verified");
        Ok(())
    }
}

#[cfg(test)]
#[path = "identity_gateway_service_tests.rs"]
mod tests;
