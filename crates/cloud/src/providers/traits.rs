//! Compute provider trait and common types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during compute provider operations.
#[derive(Error, Debug)]
pub enum CloudProviderError {
    /// The CLI executable could not be resolved on the search path.
    #[error("{0} is not installed or not in PATH. Please configure it.")]
    ToolNotFound(String),

    /// The `--version` reachability probe failed.
    #[error("Error checking {tool} version: {stderr}")]
    ToolUnavailable { tool: String, stderr: String },

    /// The command exited with a non-zero status.
    #[error("Error executing command `{command}`: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The subprocess could not be started.
    #[error("Error executing subprocess: {0}")]
    Spawn(#[from] std::io::Error),

    /// The command was called without a program name.
    #[error("Empty command line")]
    EmptyCommand,

    /// Serialization error.
    #[error("Error decoding JSON from CLI output: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No instance owns the requested IP address.
    #[error("No instance found with IP: {0}")]
    InstanceNotFound(String),
}

/// Instance (VM) status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceStatus {
    /// Instance is being provisioned or staged.
    Pending,
    /// Instance is running.
    Running,
    /// Instance is stopping or suspending.
    Stopping,
    /// Instance is stopped (or terminated, which GCE uses for stopped VMs).
    Stopped,
    /// Unknown status.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Running => write!(f, "running"),
            Self::Stopping => write!(f, "stopping"),
            Self::Stopped => write!(f, "stopped"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A virtual machine instance located by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance name.
    pub name: String,
    /// Zone name (last segment of the zone path).
    pub zone: String,
    /// Zone exactly as reported by the CLI.
    pub zone_path: String,
    /// Current status.
    pub status: InstanceStatus,
    /// Current machine type name, when reported.
    pub machine_type: Option<String>,
    /// Internal IPs of every network interface.
    pub network_ips: Vec<String>,
}

/// A machine type offered in a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineType {
    /// Machine type name (e.g. "e2-standard-4").
    pub name: String,
    /// Number of vCPUs, when reported.
    pub guest_cpus: Option<u32>,
    /// Memory in MB, when reported.
    pub memory_mb: Option<u64>,
    /// Human readable description, when reported.
    pub description: Option<String>,
}

impl MachineType {
    /// Series prefix: the text before the first hyphen, or the whole name.
    #[must_use]
    pub fn series(&self) -> &str {
        self.name
            .split_once('-')
            .map_or(self.name.as_str(), |(series, _)| series)
    }
}

/// Trait for compute providers driven through a cloud CLI.
///
/// Every operation blocks until the underlying command finishes.
pub trait ComputeProvider {
    /// Find the first instance with a network interface on `ip`.
    fn find_instance_by_ip(&self, ip: &str) -> Result<Instance, CloudProviderError>;

    /// List the machine types available in `zone`.
    fn list_machine_types(&self, zone: &str) -> Result<Vec<MachineType>, CloudProviderError>;

    /// Stop an instance.
    fn stop_instance(&self, instance: &Instance) -> Result<(), CloudProviderError>;

    /// Change the machine type of a stopped instance.
    fn set_machine_type(
        &self,
        instance: &Instance,
        machine_type: &str,
    ) -> Result<(), CloudProviderError>;

    /// Start an instance.
    fn start_instance(&self, instance: &Instance) -> Result<(), CloudProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_type(name: &str) -> MachineType {
        MachineType {
            name: name.to_string(),
            guest_cpus: None,
            memory_mb: None,
            description: None,
        }
    }

    #[test]
    fn test_series_prefix() {
        assert_eq!(machine_type("e2-standard-4").series(), "e2");
        assert_eq!(machine_type("n2d-highmem-2").series(), "n2d");
        assert_eq!(machine_type("f1").series(), "f1");
    }

    #[test]
    fn test_error_messages() {
        let err = CloudProviderError::InstanceNotFound("10.0.0.9".to_string());
        assert_eq!(err.to_string(), "No instance found with IP: 10.0.0.9");

        let err = CloudProviderError::ToolNotFound("gcloud".to_string());
        assert!(err.to_string().starts_with("gcloud is not installed"));
    }
}
