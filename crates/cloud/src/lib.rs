//! Cloud CLI integrations for vmresize.
//!
//! This crate drives a cloud provider through its command-line tool rather
//! than its HTTP API:
//!
//! - **Command Runner** - resolves the CLI on `PATH`, probes it with
//!   `--version`, runs commands and captures their output
//! - **GCP** - Compute Engine via `gcloud` (instance lookup by IP,
//!   machine-type listing, stop / set-machine-type / start)
//!
//! Every call is synchronous and blocks until the CLI exits.

pub mod providers;
pub mod runner;

pub use providers::{
    gcp, CloudProviderError, ComputeProvider, Instance, InstanceStatus, MachineType,
};
pub use runner::{CliRunner, CommandRunner};
