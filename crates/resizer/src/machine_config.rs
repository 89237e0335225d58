//! Machine-type selection: series catalog, presets and custom shapes.

use std::fmt;

use vmresize_cloud::MachineType;

use crate::menu::{read_positive_number, select_option, NumberPrompt};
use crate::prompt::{Prompt, PromptError};

/// Machine types sharing a series prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// Series prefix (e.g. "n2").
    pub name: String,
    /// Machine types in listing order.
    pub machine_types: Vec<MachineType>,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Machine types grouped by series, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesCatalog {
    series: Vec<Series>,
}

impl SeriesCatalog {
    /// Group a machine-type listing by series prefix.
    pub fn from_machine_types(machine_types: impl IntoIterator<Item = MachineType>) -> Self {
        let mut series: Vec<Series> = Vec::new();

        for machine_type in machine_types {
            let prefix = machine_type.series().to_string();
            match series.iter_mut().find(|s| s.name == prefix) {
                Some(existing) => existing.machine_types.push(machine_type),
                None => series.push(Series {
                    name: prefix,
                    machine_types: vec![machine_type],
                }),
            }
        }

        Self { series }
    }

    /// All series, in first-seen order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// One entry of the machine-type menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineTypeChoice<'a> {
    /// A predefined machine type.
    Preset(&'a MachineType),
    /// Operator-supplied vCPU and RAM.
    Custom,
}

impl fmt::Display for MachineTypeChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(mt) => {
                f.write_str(&mt.name)?;
                match (mt.guest_cpus, mt.memory_mb) {
                    (Some(cpus), Some(mb)) => write!(f, " ({cpus} vCPUs, {})", format_gb(mb)),
                    (Some(cpus), None) => write!(f, " ({cpus} vCPUs)"),
                    (None, Some(mb)) => write!(f, " ({})", format_gb(mb)),
                    (None, None) => Ok(()),
                }
            }
            Self::Custom => f.write_str("Custom Configuration"),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_gb(memory_mb: u64) -> String {
    if memory_mb % 1024 == 0 {
        format!("{} GB", memory_mb / 1024)
    } else {
        format!("{:.1} GB", memory_mb as f64 / 1024.0)
    }
}

/// Identifier of a custom shape: `<series>-custom-<vcpus>-<ram in MB>`.
pub fn custom_machine_type(series: &str, vcpus: u32, ram_gb: u32) -> String {
    let ram_mb = u64::from(ram_gb) * 1024;
    format!("{series}-custom-{vcpus}-{ram_mb}")
}

const VCPU_PROMPT: NumberPrompt<'static> = NumberPrompt {
    message: "Enter the number of vCPUs",
    non_positive: "Number of vCPUs must be greater than 0. Try again.",
    invalid: "Invalid input. Please enter a valid number for vCPUs.",
};

const RAM_PROMPT: NumberPrompt<'static> = NumberPrompt {
    message: "Enter the amount of RAM (GB)",
    non_positive: "RAM must be greater than 0 GB. Try again.",
    invalid: "Invalid input. Please enter a valid number for RAM.",
};

/// Walk the operator through series, preset and custom shape selection.
///
/// Returns the machine-type identifier to apply.
pub fn choose_machine_type(
    prompt: &mut dyn Prompt,
    catalog: &SeriesCatalog,
) -> Result<String, PromptError> {
    prompt.show("Available series:");
    let series = select_option(prompt, catalog.series(), "Select a series")?;

    prompt.show("Available machine types:");
    let options: Vec<MachineTypeChoice<'_>> = series
        .machine_types
        .iter()
        .map(MachineTypeChoice::Preset)
        .chain(std::iter::once(MachineTypeChoice::Custom))
        .collect();

    let choice = select_option(
        prompt,
        &options,
        "Select a machine type or choose custom configuration",
    )?;

    match choice {
        MachineTypeChoice::Preset(machine_type) => Ok(machine_type.name.clone()),
        MachineTypeChoice::Custom => {
            let vcpus = read_positive_number(prompt, VCPU_PROMPT)?;
            let ram_gb = read_positive_number(prompt, RAM_PROMPT)?;
            Ok(custom_machine_type(&series.name, vcpus, ram_gb))
        }
    }
}
