//! Command execution for cloud CLIs.
//!
//! Commands are passed as argument lists whose first element is the logical
//! program name (e.g. `gcloud`). The runner resolves it to a real executable,
//! probes it with `--version`, then runs the command and returns its stdout.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::providers::CloudProviderError;

/// Runs a CLI command line and returns its captured standard output.
pub trait CommandRunner {
    /// Run `command`, where `command[0]` is the logical program name.
    ///
    /// # Errors
    /// Returns an error if the program cannot be found, fails its version
    /// probe, cannot be spawned, or exits with a non-zero status.
    fn run(&self, command: &[String]) -> Result<String, CloudProviderError>;
}

/// [`CommandRunner`] backed by real subprocesses.
///
/// No retries and no timeout: every call blocks until the child exits.
#[derive(Debug, Clone, Default)]
pub struct CliRunner {
    /// Search path overriding `PATH` when set.
    search_path: Option<OsString>,
}

impl CliRunner {
    /// Create a runner that resolves programs through `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that resolves programs through `search_path` only.
    #[must_use]
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Resolve a logical program name to an executable path.
    fn resolve(&self, program: &str) -> Result<PathBuf, CloudProviderError> {
        let resolved = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir()?;
                which::which_in(program, Some(paths), cwd)
            }
            None => which::which(program),
        };

        resolved.map_err(|e| {
            debug!(program = %program, error = %e, "Executable lookup failed");
            CloudProviderError::ToolNotFound(program.to_string())
        })
    }

    /// Reachability probe: `<tool> --version` must exit successfully.
    fn probe(program: &str, executable: &Path) -> Result<(), CloudProviderError> {
        let output = Command::new(executable).arg("--version").output()?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(program = %program, stderr = %stderr, "Version probe failed");
            Err(CloudProviderError::ToolUnavailable {
                tool: program.to_string(),
                stderr,
            })
        }
    }
}

impl CommandRunner for CliRunner {
    fn run(&self, command: &[String]) -> Result<String, CloudProviderError> {
        let (program, args) = command
            .split_first()
            .ok_or(CloudProviderError::EmptyCommand)?;

        let executable = self.resolve(program)?;
        Self::probe(program, &executable)?;

        let rendered = command.join(" ");
        debug!(command = %rendered, executable = %executable.display(), "Running command");

        let output = Command::new(&executable).args(args).output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(
                command = %rendered,
                status = ?output.status.code(),
                stderr = %stderr,
                "Command failed"
            );
            return Err(CloudProviderError::CommandFailed {
                command: rendered,
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
