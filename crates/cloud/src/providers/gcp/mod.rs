//! GCP (Google Cloud Platform) provider.
//!
//! Implements the [`ComputeProvider`](super::ComputeProvider) trait for
//! Compute Engine by shelling out to `gcloud`.
//!
//! ## Commands
//!
//! - `gcloud compute instances list --project=P --format=json`
//! - `gcloud compute machine-types list --project=P --zones=Z --format=json`
//! - `gcloud compute instances stop|start NAME --project=P --zone=Z`
//! - `gcloud compute instances set-machine-type NAME --project=P --zone=Z --machine-type=T`
//!
//! ## Custom Machine Types
//!
//! Custom shapes are named `<series>-custom-<vCPUs>-<memory MB>`, for
//! example `n2-custom-4-16384` for 4 vCPUs and 16 GB of RAM.

mod client;
mod models;

pub use client::{Gcloud, DEFAULT_TOOL};
pub use models::*;
