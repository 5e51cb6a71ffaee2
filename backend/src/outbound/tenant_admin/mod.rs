//! Identity Platform tenant management adapter.
//!
//! Implements the `TenantDirectory` port over the `projects/{project}/tenants`
//! REST resource with a bearer access token.

mod directory;
mod dto;

pub use directory::{IdentityPlatformTenantDirectory, TenantAdminConnection};
