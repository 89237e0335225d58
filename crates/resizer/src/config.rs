//! Resize run configuration.
//!
//! Values may come from command-line flags; whatever is missing is asked for
//! interactively.

use clap::Args;
use vmresize_cloud::gcp::DEFAULT_TOOL;

use crate::prompt::{Prompt, PromptError};

/// Configuration gathered from the command line.
#[derive(Debug, Clone, Args)]
pub struct ResizeConfig {
    /// GCP project ID (prompted for when omitted).
    #[arg(long, value_name = "PROJECT_ID")]
    pub project: Option<String>,

    /// Internal IP address of the server to resize (prompted for when omitted).
    #[arg(long, value_name = "ADDR")]
    pub ip: Option<String>,

    /// Name or path of the gcloud executable.
    #[arg(long, value_name = "PROGRAM", env = "VMRESIZE_GCLOUD", default_value = DEFAULT_TOOL)]
    pub gcloud: String,
}

/// Project and server a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// GCP project ID.
    pub project_id: String,
    /// Internal IP of the instance.
    pub server_ip: String,
}

impl ResizeConfig {
    /// Fully interactive configuration using `gcloud` from `PATH`.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            project: None,
            ip: None,
            gcloud: DEFAULT_TOOL.to_string(),
        }
    }

    /// Resolve the target, prompting for values not given as flags.
    pub fn gather(&self, prompt: &mut dyn Prompt) -> Result<Target, PromptError> {
        let project_id = match &self.project {
            Some(project) => project.trim().to_string(),
            None => prompt
                .read_line("Enter your GCP Project ID")?
                .trim()
                .to_string(),
        };

        let server_ip = match &self.ip {
            Some(ip) => ip.trim().to_string(),
            None => prompt
                .read_line("Enter the IP address of the server")?
                .trim()
                .to_string(),
        };

        Ok(Target {
            project_id,
            server_ip,
        })
    }
}
