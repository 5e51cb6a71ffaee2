//! Reqwest-backed identity provider client.
//!
//! Owns transport only: URL construction with the API key, per-endpoint
//! timeouts and mapping of reqwest failures. Any HTTP status is handed back
//! to the domain untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;
use zeroize::Zeroizing;

use crate::domain::ports::{
    IdentityEndpoint, IdentityProviderClient, IdentityProviderError, ProviderResponse,
};
use crate::outbound::http_support::with_segments;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-endpoint request timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityToolkitTimeouts {
    pub sign_up: Duration,
    pub login: Duration,
    pub lookup: Duration,
}

impl Default for IdentityToolkitTimeouts {
    fn default() -> Self {
        Self {
            sign_up: DEFAULT_TIMEOUT,
            login: DEFAULT_TIMEOUT,
            lookup: DEFAULT_TIMEOUT,
        }
    }
}

impl IdentityToolkitTimeouts {
    fn for_endpoint(&self, endpoint: IdentityEndpoint) -> Duration {
        match endpoint {
            IdentityEndpoint::SignUp => self.sign_up,
            IdentityEndpoint::SignInWithPassword => self.login,
            IdentityEndpoint::Lookup => self.lookup,
        }
    }
}

/// Identity provider client posting JSON to `<base>/accounts:<op>?key=<api key>`.
pub struct IdentityToolkitHttpClient {
    client: Client,
    base_url: Url,
    api_key: Zeroizing<String>,
    timeouts: IdentityToolkitTimeouts,
}

impl IdentityToolkitHttpClient {
    /// Build the adapter over a shared reqwest client.
    ///
    /// # Examples
    /// ```
    /// use auth_gateway::outbound::identity_toolkit::{
    ///     IdentityToolkitHttpClient, IdentityToolkitTimeouts,
    /// };
    /// use reqwest::{Client, Url};
    ///
    /// let base = Url::parse("https://identitytoolkit.googleapis.com/v1").expect("valid url");
    /// let _client = IdentityToolkitHttpClient::new(
    ///     Client::new(),
    ///     base,
    ///     "api-key",
    ///     IdentityToolkitTimeouts::default(),
    /// );
    /// ```
    pub fn new(
        client: Client,
        base_url: Url,
        api_key: impl Into<String>,
        timeouts: IdentityToolkitTimeouts,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key: Zeroizing::new(api_key.into()),
            timeouts,
        }
    }

    fn endpoint_url(&self, endpoint: IdentityEndpoint) -> Result<Url, IdentityProviderError> {
        let mut url = with_segments(&self.base_url, [endpoint.path_segment()]).ok_or_else(|| {
            IdentityProviderError::transport(format!(
                "identity provider base URL {} cannot carry a path",
                self.base_url
            ))
        })?;
        url.query_pairs_mut()
            .append_pair("key", self.api_key.as_str());
        Ok(url)
    }
}

#[async_trait]
impl IdentityProviderClient for IdentityToolkitHttpClient {
    async fn post(
        &self,
        endpoint: IdentityEndpoint,
        payload: &Value,
    ) -> Result<ProviderResponse, IdentityProviderError> {
        let url = self.endpoint_url(endpoint)?;
        let response = self
            .client
            .post(url)
            .timeout(self.timeouts.for_endpoint(endpoint))
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(
            endpoint = endpoint.path_segment(),
            status,
            bytes = body.len(),
            "identity provider responded"
        );
        Ok(ProviderResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> IdentityProviderError {
    let timed_out = error.is_timeout();
    // The request URL carries the API key.
    let message = error.without_url().to_string();
    if timed_out {
        IdentityProviderError::timeout(message)
    } else {
        IdentityProviderError::transport(message)
    }
}
