//! Local process provisioning adapter.
//!
//! Spawns `<binary> apply -auto-approve -var=namespace=<tenant>` in the tenant
//! working directory. Arguments are passed directly to the binary, never
//! through a shell. The child shares the gateway's stdin, stdout and stderr so
//! the tool's own logs land next to the gateway's.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use crate::domain::ports::{ProvisioningError, ProvisioningRequest, ProvisioningTrigger};

/// Binary and working directory used for local applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalProvisioningCommand {
    pub binary: PathBuf,
    pub working_dir: PathBuf,
    pub timeout: Duration,
}

/// Provisioning trigger that runs the infrastructure tool as a child process.
#[derive(Debug, Clone)]
pub struct LocalProcessProvisioner {
    command: LocalProvisioningCommand,
}

impl LocalProcessProvisioner {
    pub fn new(command: LocalProvisioningCommand) -> Self {
        Self { command }
    }

    fn arguments(request: &ProvisioningRequest) -> [String; 3] {
        [
            "apply".to_owned(),
            "-auto-approve".to_owned(),
            format!("-var=namespace={}", request.tenant_name()),
        ]
    }
}

#[async_trait]
impl ProvisioningTrigger for LocalProcessProvisioner {
    async fn apply(&self, request: &ProvisioningRequest) -> Result<(), ProvisioningError> {
        let LocalProvisioningCommand {
            binary,
            working_dir,
            timeout,
        } = &self.command;
        let mut child = Command::new(binary)
            .args(Self::arguments(request))
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| {
                ProvisioningError::launch(format!("{}: {err}", binary.display()))
            })?;
        info!(
            binary = %binary.display(),
            tenant_name = request.tenant_name(),
            pid = ?child.id(),
            "provisioning process started"
        );

        let status = match tokio::time::timeout(*timeout, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(err)) => {
                return Err(ProvisioningError::launch(format!(
                    "failed to wait for provisioning process: {err}"
                )));
            }
            Err(_) => {
                if let Err(err) = child.kill().await {
                    warn!(error = %err, "failed to kill timed out provisioning process");
                }
                return Err(ProvisioningError::timeout(format!(
                    "provisioning process exceeded {timeout:?}"
                )));
            }
        };

        if status.success() {
            info!(tenant_name = request.tenant_name(), "provisioning process succeeded");
            Ok(())
        } else {
            warn!(
                tenant_name = request.tenant_name(),
                status = %status,
                "provisioning process failed"
            );
            Err(ProvisioningError::exited(status.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TenantName;

    #[test]
    fn tenant_name_is_a_single_argument() {
        let name = TenantName::new("acme; rm -rf /").expect("valid name");
        let args = LocalProcessProvisioner::arguments(&ProvisioningRequest::new(&name));
        assert_eq!(
            args,
            [
                "apply".to_owned(),
                "-auto-approve".to_owned(),
                "-var=namespace=acme; rm -rf /".to_owned(),
            ]
        );
    }
}
