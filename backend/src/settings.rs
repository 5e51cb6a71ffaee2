//! Gateway configuration loaded via OrthoConfig.
//!
//! [`GatewaySettings`] is the raw layer merged from CLI flags, `AUTH_GATEWAY_*`
//! environment variables and an optional config file. [`GatewayConfig`]
//! validates it into the typed sections the server wires adapters from.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use actix_web::http::header::HeaderName;
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::inbound::http::state::DEFAULT_ID_TOKEN_HEADER;
use crate::outbound::identity_toolkit::IdentityToolkitTimeouts;
use crate::outbound::provisioning::LocalProvisioningCommand;
use crate::outbound::tenant_admin::TenantAdminConnection;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_ADMIN_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v2";
const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PROVISIONING_TIMEOUT_SECS: u64 = 600;
const DEFAULT_ADMIN_PAGE_SIZE: u32 = 100;
const DEFAULT_PROVISIONING_BINARY: &str = "/terraform";
const DEFAULT_PROVISIONING_WORKING_DIR: &str = "/opt/terraform/tenant";

/// Raw configuration values as supplied by the operator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTH_GATEWAY")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Identity provider API key sent as the `key` query parameter.
    pub identity_api_key: Option<String>,
    /// Identity provider REST root.
    pub identity_base_url: Option<String>,
    pub sign_up_timeout_secs: Option<u64>,
    pub login_timeout_secs: Option<u64>,
    pub lookup_timeout_secs: Option<u64>,
    /// Tenant management REST root.
    pub admin_base_url: Option<String>,
    /// Project owning the tenants.
    pub admin_project_id: Option<String>,
    /// Access token authorising tenant management calls.
    pub admin_access_token: Option<String>,
    pub admin_timeout_secs: Option<u64>,
    pub admin_page_size: Option<u32>,
    /// `remote` (default) or `local`.
    pub provisioning_mode: Option<String>,
    /// Provisioning service root; required in remote mode.
    pub provisioning_url: Option<String>,
    pub provisioning_timeout_secs: Option<u64>,
    /// Infrastructure tool binary used in local mode.
    pub provisioning_binary: Option<PathBuf>,
    /// Working directory for the local infrastructure tool.
    pub provisioning_working_dir: Option<PathBuf>,
    /// Header carrying the client ID token on `POST /verify`.
    pub auth_header: Option<String>,
}

/// Reasons raw settings cannot be turned into a [`GatewayConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required setting {setting}")]
    Missing { setting: &'static str },
    #[error("setting {setting} is not a valid URL: {value}")]
    InvalidUrl { setting: &'static str, value: String },
    #[error("setting bind_addr is not a socket address: {value}")]
    InvalidBindAddr { value: String },
    #[error("setting auth_header is not a valid header name: {value}")]
    InvalidHeader { value: String },
    #[error("setting provisioning_mode must be `remote` or `local`, got {value}")]
    InvalidProvisioningMode { value: String },
    #[error("setting {setting} must be greater than zero")]
    Zero { setting: &'static str },
}

/// Identity provider client configuration.
#[derive(Clone)]
pub struct IdentityProviderConfig {
    pub base_url: Url,
    pub api_key: Zeroizing<String>,
    pub timeouts: IdentityToolkitTimeouts,
}

/// Which provisioning adapter to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningConfig {
    Remote { base_url: Url, timeout: Duration },
    Local(LocalProvisioningCommand),
}

/// Validated gateway configuration.
#[derive(Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    pub identity: IdentityProviderConfig,
    pub tenant_admin: TenantAdminConnection,
    pub provisioning: ProvisioningConfig,
    pub id_token_header: HeaderName,
}

fn required(value: Option<String>, setting: &'static str) -> Result<String, SettingsError> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::Missing { setting })
}

fn url(value: Option<String>, default: &str, setting: &'static str) -> Result<Url, SettingsError> {
    let raw = value.unwrap_or_else(|| default.to_owned());
    parse_url(raw, setting)
}

fn parse_url(raw: String, setting: &'static str) -> Result<Url, SettingsError> {
    let parsed = Url::parse(raw.trim());
    match parsed {
        Ok(parsed) if !parsed.cannot_be_a_base() => Ok(parsed),
        _ => Err(SettingsError::InvalidUrl {
            setting,
            value: raw,
        }),
    }
}

fn seconds(
    value: Option<u64>,
    default: u64,
    setting: &'static str,
) -> Result<Duration, SettingsError> {
    match value.unwrap_or(default) {
        0 => Err(SettingsError::Zero { setting }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

impl TryFrom<GatewaySettings> for GatewayConfig {
    type Error = SettingsError;

    fn try_from(settings: GatewaySettings) -> Result<Self, Self::Error> {
        let raw_bind = settings
            .bind_addr
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr: SocketAddr = raw_bind
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidBindAddr { value: raw_bind })?;

        let identity = IdentityProviderConfig {
            base_url: url(
                settings.identity_base_url,
                DEFAULT_IDENTITY_BASE_URL,
                "identity_base_url",
            )?,
            api_key: Zeroizing::new(required(settings.identity_api_key, "identity_api_key")?),
            timeouts: IdentityToolkitTimeouts {
                sign_up: seconds(
                    settings.sign_up_timeout_secs,
                    DEFAULT_CALL_TIMEOUT_SECS,
                    "sign_up_timeout_secs",
                )?,
                login: seconds(
                    settings.login_timeout_secs,
                    DEFAULT_CALL_TIMEOUT_SECS,
                    "login_timeout_secs",
                )?,
                lookup: seconds(
                    settings.lookup_timeout_secs,
                    DEFAULT_CALL_TIMEOUT_SECS,
                    "lookup_timeout_secs",
                )?,
            },
        };

        let page_size = settings.admin_page_size.unwrap_or(DEFAULT_ADMIN_PAGE_SIZE);
        if page_size == 0 {
            return Err(SettingsError::Zero {
                setting: "admin_page_size",
            });
        }
        let tenant_admin = TenantAdminConnection {
            base_url: url(settings.admin_base_url, DEFAULT_ADMIN_BASE_URL, "admin_base_url")?,
            project_id: required(settings.admin_project_id, "admin_project_id")?,
            access_token: Zeroizing::new(required(
                settings.admin_access_token,
                "admin_access_token",
            )?),
            timeout: seconds(
                settings.admin_timeout_secs,
                DEFAULT_CALL_TIMEOUT_SECS,
                "admin_timeout_secs",
            )?,
            page_size,
        };

        let provisioning_timeout = seconds(
            settings.provisioning_timeout_secs,
            DEFAULT_PROVISIONING_TIMEOUT_SECS,
            "provisioning_timeout_secs",
        )?;
        let mode = settings
            .provisioning_mode
            .map(|m| m.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "remote".to_owned());
        let provisioning = match mode.as_str() {
            "remote" => ProvisioningConfig::Remote {
                base_url: parse_url(
                    required(settings.provisioning_url, "provisioning_url")?,
                    "provisioning_url",
                )?,
                timeout: provisioning_timeout,
            },
            "local" => ProvisioningConfig::Local(LocalProvisioningCommand {
                binary: settings
                    .provisioning_binary
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PROVISIONING_BINARY)),
                working_dir: settings
                    .provisioning_working_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PROVISIONING_WORKING_DIR)),
                timeout: provisioning_timeout,
            }),
            _ => return Err(SettingsError::InvalidProvisioningMode { value: mode.clone() }),
        };

        let raw_header = settings
            .auth_header
            .unwrap_or_else(|| DEFAULT_ID_TOKEN_HEADER.to_owned());
        let id_token_header = HeaderName::from_bytes(raw_header.trim().as_bytes())
            .map_err(|_| SettingsError::InvalidHeader { value: raw_header })?;

        Ok(Self {
            bind_addr,
            identity,
            tenant_admin,
            provisioning,
            id_token_header,
        })
    }
}
