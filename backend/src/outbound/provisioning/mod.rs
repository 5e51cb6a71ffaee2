//! Provisioning trigger adapters.
//!
//! [`LocalProcessProvisioner`] runs the infrastructure tool next to the
//! gateway; [`RemoteProvisioningClient`] asks a provisioning service to do it.
//! Startup configuration picks exactly one.

mod process;
mod remote;

pub use process::{LocalProcessProvisioner, LocalProvisioningCommand};
pub use remote::RemoteProvisioningClient;
