//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`IdentityGateway`], [`TenantAdministrator`]) are what the
//! HTTP adapter calls. Driven ports ([`IdentityProviderClient`],
//! [`TenantDirectory`], [`ProvisioningTrigger`]) are what the services call;
//! outbound adapters implement them. Each port exposes a typed error enum so
//! adapters map their failures into predictable variants.

mod identity_gateway;
mod identity_provider;
mod macros;
mod provisioning_trigger;
mod tenant_administrator;
mod tenant_directory;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use identity_gateway::MockIdentityGateway;
pub use identity_gateway::IdentityGateway;
#[cfg(test)]
pub use identity_provider::MockIdentityProviderClient;
pub use identity_provider::{
    IdentityEndpoint, IdentityProviderClient, IdentityProviderError, ProviderResponse,
};
#[cfg(test)]
pub use provisioning_trigger::MockProvisioningTrigger;
pub use provisioning_trigger::{ProvisioningError, ProvisioningRequest, ProvisioningTrigger};
#[cfg(test)]
pub use tenant_administrator::MockTenantAdministrator;
pub use tenant_administrator::TenantAdministrator;
#[cfg(test)]
pub use tenant_directory::MockTenantDirectory;
pub use tenant_directory::{TenantDirectory, TenantDirectoryError, TenantPage};
