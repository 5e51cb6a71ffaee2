//! End-user account handlers.
//!
//! ```text
//! POST /sign-up {"email":"ada@example.com","password":"s3cret","tenantId":"acme-x1y2z"}
//! POST /login   {"email":"ada@example.com","password":"s3cret","tenantId":"acme-x1y2z"}
//! POST /verify  X-Id-Token: <id token>
//! ```

use actix_web::{HttpRequest, HttpResponse, http::header::ContentType, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, IdToken, UserCredentials, UserSession};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{map_credentials_error, missing_header_error};

/// Body returned by `POST /verify` on success.
pub const VERIFIED_BODY: &str = "ID Token verified.";

/// Credentials body for sign-up and login.
///
/// Missing fields deserialize as empty strings so they fail validation with
/// a field-specific 400 rather than a generic decode error.
#[derive(Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "s3cret")]
    pub password: String,
    #[serde(default)]
    #[schema(example = "acme-x1y2z")]
    pub tenant_id: String,
}

impl TryFrom<&CredentialsRequest> for UserCredentials {
    type Error = Error;

    fn try_from(value: &CredentialsRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password, &value.tenant_id)
            .map_err(map_credentials_error)
    }
}

/// Session returned after sign-up or login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionBody {
    #[schema(example = "Xk3p9fQ2")]
    pub user_id: String,
    #[schema(example = "acme-x1y2z")]
    pub tenant_id: String,
    pub id_token: String,
}

impl From<UserSession> for SessionBody {
    fn from(session: UserSession) -> Self {
        Self {
            user_id: session.user_id().to_owned(),
            tenant_id: session.tenant_id().to_string(),
            id_token: session.id_token().expose().to_owned(),
        }
    }
}

/// Register a user in a tenant.
#[utoipa::path(
    post,
    path = "/sign-up",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "User registered", body = SessionBody),
        (status = 400, description = "A field is missing or blank", body = Error),
        (status = 401, description = "Identity provider refused the sign-up", body = Error),
        (status = 503, description = "Identity provider unreachable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "signUp"
)]
#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<SessionBody>> {
    let credentials = UserCredentials::try_from(&*payload)?;
    let session = state.identity.sign_up(&credentials).await?;
    Ok(web::Json(session.into()))
}

/// Exchange credentials for a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login succeeded", body = SessionBody),
        (status = 400, description = "A field is missing or blank", body = Error),
        (status = 401, description = "Identity provider refused the credentials", body = Error),
        (status = 503, description = "Identity provider unreachable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<SessionBody>> {
    let credentials = UserCredentials::try_from(&*payload)?;
    match state.identity.login(&credentials).await? {
        Some(session) => Ok(web::Json(session.into())),
        None => Err(Error::unauthorized("invalid credentials")),
    }
}

/// Validate an ID token with the identity provider.
///
/// The token is read from the configured header (`X-Id-Token` by default).
#[utoipa::path(
    post,
    path = "/verify",
    params(("X-Id-Token" = String, Header, description = "Client ID token")),
    responses(
        (status = 200, description = "Token verified", body = String, content_type = "text/plain"),
        (status = 400, description = "Token header missing", body = Error),
        (status = 401, description = "Identity provider rejected the token", body = Error),
        (status = 503, description = "Identity provider unreachable", body = Error)
    ),
    tags = ["accounts"],
    operation_id = "verify"
)]
#[post("/verify")]
pub async fn verify(state: web::Data<HttpState>, req: HttpRequest) -> ApiResult<HttpResponse> {
    let header = &state.id_token_header;
    let id_token = req
        .headers()
        .get(header)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| IdToken::new(value.trim()).ok())
        .ok_or_else(|| missing_header_error(header.as_str()))?;
    state.identity.verify(&id_token).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(VERIFIED_BODY))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
