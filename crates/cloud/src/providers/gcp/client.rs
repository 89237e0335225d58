//! `gcloud` CLI client implementation.

use tracing::{debug, info};

use super::models::{last_segment, GceInstance, GceMachineType};
use crate::providers::traits::{
    CloudProviderError, ComputeProvider, Instance, InstanceStatus, MachineType,
};
use crate::runner::{CliRunner, CommandRunner};

/// Logical name of the Google Cloud CLI.
pub const DEFAULT_TOOL: &str = "gcloud";

/// GCP compute provider driven through `gcloud`.
#[derive(Debug, Clone)]
pub struct Gcloud<R = CliRunner> {
    /// Command runner.
    runner: R,
    /// Project ID.
    project_id: String,
    /// Logical program name or path of the CLI.
    tool: String,
}

impl Gcloud<CliRunner> {
    /// Create a provider that runs the real `gcloud` found on `PATH`.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self::with_runner(CliRunner::new(), project_id)
    }
}

impl<R: CommandRunner> Gcloud<R> {
    /// Create a provider on top of an arbitrary command runner.
    pub fn with_runner(runner: R, project_id: impl Into<String>) -> Self {
        Self {
            runner,
            project_id: project_id.into(),
            tool: DEFAULT_TOOL.to_string(),
        }
    }

    /// Use a different program name or path for the CLI.
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Project ID this provider operates on.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Build `<tool> <args...> --project=<project>`.
    fn command(&self, args: &[&str]) -> Vec<String> {
        std::iter::once(self.tool.clone())
            .chain(args.iter().map(ToString::to_string))
            .chain(std::iter::once(format!("--project={}", self.project_id)))
            .collect()
    }

    /// Run an instance lifecycle subcommand (`stop`, `start`, ...).
    fn instance_command(
        &self,
        verb: &str,
        instance: &Instance,
        extra: Option<String>,
    ) -> Result<(), CloudProviderError> {
        let mut command = self.command(&["compute", "instances", verb, instance.name.as_str()]);
        command.push(format!("--zone={}", instance.zone));
        command.extend(extra);

        self.runner.run(&command)?;
        Ok(())
    }

    /// Convert a GCE instance to our type.
    fn to_instance(instance: &GceInstance) -> Instance {
        let status = match instance.status.as_deref() {
            Some("PROVISIONING" | "STAGING") => InstanceStatus::Pending,
            Some("RUNNING") => InstanceStatus::Running,
            Some("STOPPING" | "SUSPENDING") => InstanceStatus::Stopping,
            Some("STOPPED" | "SUSPENDED" | "TERMINATED") => InstanceStatus::Stopped,
            _ => InstanceStatus::Unknown,
        };

        Instance {
            name: instance.name.clone(),
            zone: last_segment(&instance.zone).to_string(),
            zone_path: instance.zone.clone(),
            status,
            machine_type: instance
                .machine_type
                .as_deref()
                .map(|mt| last_segment(mt).to_string()),
            network_ips: instance
                .network_interfaces
                .iter()
                .filter_map(|ni| ni.network_i_p.clone())
                .collect(),
        }
    }

    /// Convert a GCE machine type to our type.
    fn to_machine_type(machine_type: GceMachineType) -> MachineType {
        MachineType {
            name: machine_type.name,
            guest_cpus: machine_type.guest_cpus,
            memory_mb: machine_type.memory_mb,
            description: machine_type.description,
        }
    }
}

impl<R: CommandRunner> ComputeProvider for Gcloud<R> {
    fn find_instance_by_ip(&self, ip: &str) -> Result<Instance, CloudProviderError> {
        let command = self.command(&["compute", "instances", "list", "--format=json"]);
        let output = self.runner.run(&command)?;

        let instances: Vec<GceInstance> = serde_json::from_str(&output)?;
        debug!(
            project = %self.project_id,
            count = instances.len(),
            "Listed instances"
        );

        let found = instances.iter().find(|instance| {
            instance
                .network_interfaces
                .iter()
                .any(|ni| ni.network_i_p.as_deref() == Some(ip))
        });

        match found {
            Some(instance) => {
                info!(instance = %instance.name, ip = %ip, "Matched instance by IP");
                Ok(Self::to_instance(instance))
            }
            None => Err(CloudProviderError::InstanceNotFound(ip.to_string())),
        }
    }

    fn list_machine_types(&self, zone: &str) -> Result<Vec<MachineType>, CloudProviderError> {
        let zones = format!("--zones={zone}");
        let command = self.command(&[
            "compute",
            "machine-types",
            "list",
            zones.as_str(),
            "--format=json",
        ]);
        let output = self.runner.run(&command)?;

        let machine_types: Vec<GceMachineType> = serde_json::from_str(&output)?;
        debug!(zone = %zone, count = machine_types.len(), "Listed machine types");

        Ok(machine_types
            .into_iter()
            .map(Self::to_machine_type)
            .collect())
    }

    fn stop_instance(&self, instance: &Instance) -> Result<(), CloudProviderError> {
        info!(instance = %instance.name, zone = %instance.zone, "Stopping instance");
        self.instance_command("stop", instance, None)
    }

    fn set_machine_type(
        &self,
        instance: &Instance,
        machine_type: &str,
    ) -> Result<(), CloudProviderError> {
        info!(
            instance = %instance.name,
            zone = %instance.zone,
            machine_type = %machine_type,
            "Setting machine type"
        );
        self.instance_command(
            "set-machine-type",
            instance,
            Some(format!("--machine-type={machine_type}")),
        )
    }

    fn start_instance(&self, instance: &Instance) -> Result<(), CloudProviderError> {
        info!(instance = %instance.name, zone = %instance.zone, "Starting instance");
        self.instance_command("start", instance, None)
    }
}
