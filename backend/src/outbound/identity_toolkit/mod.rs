//! Identity Toolkit outbound adapter.
//!
//! Implements the `IdentityProviderClient` port over the provider's
//! `accounts:*` REST endpoints.

mod http_client;

pub use http_client::{IdentityToolkitHttpClient, IdentityToolkitTimeouts};
