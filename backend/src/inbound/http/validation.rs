//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejection here is a 400 produced before any collaborator is called.

use actix_web::{HttpRequest, error::JsonPayloadError, error::QueryPayloadError};
use serde_json::json;

use crate::domain::{CredentialsValidationError, Error, TenantValidationError};

/// Validation error codes carried in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    MissingHeader,
    MalformedBody,
    MalformedQuery,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::MissingHeader => "missing_header",
            Self::MalformedBody => "malformed_body",
            Self::MalformedQuery => "malformed_query",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const PASSWORD: FieldName = FieldName::new("password");
pub(crate) const TENANT_ID: FieldName = FieldName::new("tenantId");
pub(crate) const NAME: FieldName = FieldName::new("name");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("{} must not be empty", field.0)).with_details(json!({
        "field": field.0,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

pub(crate) fn missing_header_error(header: &str) -> Error {
    Error::invalid_request(format!("Required header is missing: {header}")).with_details(json!({
        "header": header,
        "code": ValidationCode::MissingHeader.as_str(),
    }))
}

pub(crate) fn map_credentials_error(err: CredentialsValidationError) -> Error {
    match err {
        CredentialsValidationError::EmptyEmail => missing_field_error(EMAIL),
        CredentialsValidationError::EmptyPassword => missing_field_error(PASSWORD),
        CredentialsValidationError::EmptyTenantId => missing_field_error(TENANT_ID),
    }
}

pub(crate) fn map_tenant_error(err: TenantValidationError) -> Error {
    match err {
        TenantValidationError::EmptyTenantId => missing_field_error(TENANT_ID),
        TenantValidationError::EmptyTenantName => missing_field_error(NAME),
    }
}

/// `JsonConfig` error handler rendering undecodable bodies in the error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("request body is not valid JSON: {err}"))
        .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() }))
        .into()
}

/// `QueryConfig` error handler rendering bad query strings in the error envelope.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("query string is invalid: {err}"))
        .with_details(json!({ "code": ValidationCode::MalformedQuery.as_str() }))
        .into()
}
