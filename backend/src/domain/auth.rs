//! Authentication primitives: user credentials, ID tokens and sessions.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::TenantId;

/// Domain error returned when sign-up or login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was missing or blank.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Tenant identifier was missing or blank once trimmed.
    #[error("tenantId must not be empty")]
    EmptyTenantId,
}

/// Validated credentials used for sign-up and login.
///
/// ## Invariants
/// - `email` and `password` must contain a non-whitespace character; both
///   are kept exactly as supplied and forwarded to the provider unchanged.
/// - `tenant_id` is trimmed and non-empty.
///
/// # Examples
/// ```
/// use auth_gateway::domain::UserCredentials;
///
/// let creds = UserCredentials::try_from_parts("ada@example.com", "s3cret", " t1 ").unwrap();
/// assert_eq!(creds.email(), "ada@example.com");
/// assert_eq!(creds.tenant_id().as_ref(), "t1");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct UserCredentials {
    email: String,
    password: Zeroizing<String>,
    tenant_id: TenantId,
}

impl UserCredentials {
    /// Construct credentials from raw request inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        tenant_id: &str,
    ) -> Result<Self, CredentialsValidationError> {
        if email.trim().is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        if password.trim().is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        let tenant_id =
            TenantId::new(tenant_id).map_err(|_| CredentialsValidationError::EmptyTenantId)?;

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
            tenant_id,
        })
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .finish()
    }
}

/// Validation error for [`IdToken`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("id token must not be empty")]
pub struct EmptyIdToken;

/// Opaque bearer credential issued by the identity provider.
///
/// The gateway never inspects the token contents. Logs only ever see the
/// [`fingerprint`](IdToken::fingerprint).
#[derive(Clone, PartialEq, Eq)]
pub struct IdToken(Zeroizing<String>);

impl IdToken {
    /// Wrap a raw token, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyIdToken> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(EmptyIdToken);
        }
        Ok(Self(Zeroizing::new(raw)))
    }

    /// Raw token string.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Short SHA-256 fingerprint suitable for log correlation.
    ///
    /// # Examples
    /// ```
    /// use auth_gateway::domain::IdToken;
    ///
    /// let token = IdToken::new("tok").unwrap();
    /// assert_eq!(token.fingerprint().len(), 12);
    /// ```
    pub fn fingerprint(&self) -> String {
        const FINGERPRINT_LEN: usize = 12;
        let digest = Sha256::digest(self.0.as_bytes());
        let mut encoded = hex::encode(digest);
        encoded.truncate(FINGERPRINT_LEN);
        encoded
    }
}

impl fmt::Debug for IdToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdToken({})", self.fingerprint())
    }
}

/// Authenticated user session returned by sign-up and login.
///
/// ## Invariants
/// - `tenant_id` is the tenant the caller asked for, never a value echoed back
///   by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    user_id: String,
    tenant_id: TenantId,
    id_token: IdToken,
}

impl UserSession {
    pub fn new(user_id: impl Into<String>, tenant_id: TenantId, id_token: IdToken) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id,
            id_token,
        }
    }

    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    pub fn id_token(&self) -> &IdToken {
        &self.id_token
    }
}
