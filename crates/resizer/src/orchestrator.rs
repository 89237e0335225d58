//! Resize orchestration.
//!
//! Locates the instance, asks for the new machine type, then runs
//! stop → set-machine-type → start. There is no rollback: if reconfiguring
//! fails the instance is left stopped.

use anyhow::{Context, Result};
use tracing::info;
use vmresize_cloud::{ComputeProvider, Instance};

use crate::machine_config::{choose_machine_type, SeriesCatalog};
use crate::prompt::Prompt;
use crate::ui;

/// Result of a completed resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeOutcome {
    /// The instance that was resized.
    pub instance: Instance,
    /// Machine type now applied to it.
    pub machine_type: String,
}

/// Drives one resize session against a compute provider.
pub struct Resizer<P> {
    provider: P,
}

impl<P: ComputeProvider> Resizer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Full interactive session for the instance owning `server_ip`.
    pub fn run(&self, prompt: &mut dyn Prompt, server_ip: &str) -> Result<ResizeOutcome> {
        let instance = self
            .provider
            .find_instance_by_ip(server_ip)
            .context("Failed to locate instance")?;

        ui::print_info(&format!(
            "Instance found: {} in zone: {}",
            instance.name, instance.zone_path
        ));
        ui::print_kv("Status", &instance.status.to_string());
        if let Some(current) = &instance.machine_type {
            ui::print_kv("Current machine type", current);
        }
        println!();

        let machine_types = self
            .provider
            .list_machine_types(&instance.zone)
            .with_context(|| format!("Failed to list machine types in {}", instance.zone))?;
        let catalog = SeriesCatalog::from_machine_types(machine_types);

        let machine_type = choose_machine_type(prompt, &catalog)?;
        println!();
        ui::print_info(&format!("Selected machine type: {machine_type}"));

        self.apply(&instance, &machine_type)?;

        Ok(ResizeOutcome {
            instance,
            machine_type,
        })
    }

    /// Stop the instance, apply `machine_type`, then start it again.
    pub fn apply(&self, instance: &Instance, machine_type: &str) -> Result<()> {
        ui::print_progress_step(1, 3, "Stopping the instance...");
        ui::with_spinner("Waiting for gcloud", || {
            self.provider.stop_instance(instance)
        })
        .with_context(|| format!("Failed to stop instance {}", instance.name))?;
        ui::print_success("Instance stopped successfully!");

        ui::print_progress_step(2, 3, "Updating instance configuration...");
        ui::with_spinner("Waiting for gcloud", || {
            self.provider.set_machine_type(instance, machine_type)
        })
        .with_context(|| {
            format!(
                "Failed to set machine type {machine_type} on {} (instance left stopped)",
                instance.name
            )
        })?;
        ui::print_success("Instance updated successfully!");

        ui::print_progress_step(3, 3, "Starting the instance...");
        ui::with_spinner("Waiting for gcloud", || {
            self.provider.start_instance(instance)
        })
        .with_context(|| format!("Failed to start instance {}", instance.name))?;
        ui::print_success("Instance started successfully!");

        info!(
            instance = %instance.name,
            zone = %instance.zone,
            machine_type = %machine_type,
            "Resize complete"
        );
        Ok(())
    }
}
