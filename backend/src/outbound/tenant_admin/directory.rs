//! Reqwest-backed tenant directory.
//!
//! Maps HTTP outcomes onto `TenantDirectoryError`; draining pages and deciding
//! what a failure means for the caller is left to the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{CreateTenantDto, ListTenantsDto, TenantDto};
use crate::domain::ports::{TenantDirectory, TenantDirectoryError, TenantPage};
use crate::domain::{Tenant, TenantCreateRequest, TenantId};
use crate::outbound::http_support::{body_preview, with_segments};

/// Connection settings for the tenant management API.
#[derive(Clone)]
pub struct TenantAdminConnection {
    /// API root, e.g. `https://identitytoolkit.googleapis.com/v2`.
    pub base_url: Url,
    /// Project owning the tenants.
    pub project_id: String,
    /// OAuth2 access token with tenant admin scope.
    pub access_token: Zeroizing<String>,
    /// Per-call timeout.
    pub timeout: Duration,
    /// Page size requested when listing.
    pub page_size: u32,
}

/// Tenant directory backed by the Identity Platform REST API.
pub struct IdentityPlatformTenantDirectory {
    client: Client,
    tenants_url: Url,
    access_token: Zeroizing<String>,
    timeout: Duration,
    page_size: u32,
}

impl IdentityPlatformTenantDirectory {
    /// Build the adapter over a shared reqwest client.
    ///
    /// # Errors
    ///
    /// Returns [`TenantDirectoryError::Transport`] when the base URL cannot
    /// carry the tenants path.
    pub fn new(
        client: Client,
        connection: TenantAdminConnection,
    ) -> Result<Self, TenantDirectoryError> {
        let TenantAdminConnection {
            base_url,
            project_id,
            access_token,
            timeout,
            page_size,
        } = connection;
        let tenants_url = with_segments(&base_url, ["projects", project_id.as_str(), "tenants"])
            .ok_or_else(|| {
                TenantDirectoryError::transport(format!(
                    "tenant admin base URL {base_url} cannot carry a path"
                ))
            })?;
        Ok(Self {
            client,
            tenants_url,
            access_token,
            timeout,
            page_size: page_size.max(1),
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(self.access_token.as_str())
            .timeout(self.timeout)
    }

    fn tenant_url(&self, tenant_id: &TenantId) -> Result<Url, TenantDirectoryError> {
        with_segments(&self.tenants_url, [tenant_id.as_ref()]).ok_or_else(|| {
            TenantDirectoryError::transport("tenant admin URL cannot carry a tenant path")
        })
    }
}

async fn read_body(
    request: RequestBuilder,
) -> Result<(StatusCode, Vec<u8>), TenantDirectoryError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    debug!(status = status.as_u16(), bytes = body.len(), "tenant admin API responded");
    Ok((status, body.to_vec()))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, TenantDirectoryError> {
    serde_json::from_slice(body).map_err(|err| {
        TenantDirectoryError::decode(format!("invalid tenant admin JSON payload: {err}"))
    })
}

fn map_status_error(status: StatusCode, body: &[u8]) -> TenantDirectoryError {
    TenantDirectoryError::rejected(status.as_u16(), body_preview(body))
}

fn map_transport_error(error: reqwest::Error) -> TenantDirectoryError {
    if error.is_timeout() {
        TenantDirectoryError::timeout(error.to_string())
    } else {
        TenantDirectoryError::transport(error.to_string())
    }
}

#[async_trait]
impl TenantDirectory for IdentityPlatformTenantDirectory {
    async fn create_tenant(
        &self,
        request: &TenantCreateRequest,
    ) -> Result<Tenant, TenantDirectoryError> {
        let (status, body) = read_body(
            self.request(Method::POST, self.tenants_url.clone())
                .json(&CreateTenantDto::from(request)),
        )
        .await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        decode::<TenantDto>(&body)?
            .into_domain()
            .map_err(TenantDirectoryError::decode)
    }

    async fn delete_tenant(&self, tenant_id: &TenantId) -> Result<(), TenantDirectoryError> {
        let url = self.tenant_url(tenant_id)?;
        let (status, body) = read_body(self.request(Method::DELETE, url)).await?;
        match status {
            StatusCode::NOT_FOUND => Err(TenantDirectoryError::not_found(tenant_id.as_ref())),
            status if status.is_success() => Ok(()),
            status => Err(map_status_error(status, &body)),
        }
    }

    async fn list_tenants(
        &self,
        page_token: Option<String>,
    ) -> Result<TenantPage, TenantDirectoryError> {
        let mut url = self.tenants_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageSize", &self.page_size.to_string());
            if let Some(token) = page_token.as_deref() {
                query.append_pair("pageToken", token);
            }
        }
        let (status, body) = read_body(self.request(Method::GET, url)).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        let page: ListTenantsDto = decode(&body)?;
        let tenants = page
            .tenants
            .into_iter()
            .map(TenantDto::into_domain)
            .collect::<Result<Vec<_>, _>>()
            .map_err(TenantDirectoryError::decode)?;
        Ok(TenantPage {
            tenants,
            next_page_token: page.next_page_token,
        })
    }
}
