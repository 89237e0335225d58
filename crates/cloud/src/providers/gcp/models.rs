//! `gcloud --format=json` response models.
//!
//! Only the fields vmresize consumes are modelled; everything else in the
//! CLI output is ignored.

use serde::Deserialize;

// ============================================================================
// Compute Engine types
// ============================================================================

/// Compute Engine instance as printed by `gcloud compute instances list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GceInstance {
    /// Instance name.
    pub name: String,
    /// Zone URL (e.g. ".../projects/p/zones/us-central1-a").
    pub zone: String,
    /// Instance status (RUNNING, TERMINATED, ...).
    pub status: Option<String>,
    /// Machine type URL.
    pub machine_type: Option<String>,
    /// Network interfaces.
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

/// Network interface.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    /// Interface name (nic0, nic1, ...).
    pub name: Option<String>,
    /// Internal IP address (`networkIP`).
    pub network_i_p: Option<String>,
}

/// Machine type as printed by `gcloud compute machine-types list`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GceMachineType {
    /// Machine type name.
    pub name: String,
    /// Number of vCPUs.
    pub guest_cpus: Option<u32>,
    /// Memory in MB.
    pub memory_mb: Option<u64>,
    /// Description (e.g. "4 vCPUs, 16 GB RAM").
    pub description: Option<String>,
}

/// Last segment of a slash-delimited resource path.
pub(crate) fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
