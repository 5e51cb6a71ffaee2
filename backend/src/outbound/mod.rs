//! Outbound adapters implementing the driven ports.
//!
//! - **identity_toolkit**: identity provider `accounts:*` REST client
//! - **tenant_admin**: tenant management REST client
//! - **provisioning**: local process and remote service provisioning triggers
//!
//! Adapters translate between domain types and wire formats and own timeouts.
//! They hold no business rules; every reqwest-based adapter receives the one
//! shared `reqwest::Client` built at startup.

mod http_support;
pub mod identity_toolkit;
pub mod provisioning;
pub mod tenant_admin;
