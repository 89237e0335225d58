//! End-to-end tests for the `vmresize` binary.
//!
//! A fake `gcloud` shell script is placed alone on `PATH`; it logs every
//! invocation and answers list commands with canned JSON.

#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

// =============================================================================
// Fake gcloud
// =============================================================================

const FAKE_GCLOUD: &str = r#"#!/bin/sh
if [ "$1" = "--version" ]; then
    echo "Google Cloud SDK 500.0.0"
    exit 0
fi
echo "$*" >> "$FAKE_GCLOUD_LOG"
if [ -n "$FAKE_GCLOUD_FAIL" ] && [ "$FAKE_GCLOUD_FAIL" = "$3" ]; then
    echo "ERROR: (gcloud.compute.instances.$3) simulated failure" >&2
    exit 1
fi
case "$2 $3" in
"instances list")
    if [ -n "$FAKE_GCLOUD_BAD_JSON" ]; then
        echo "Listed 0 items."
    else
        printf '%s\n' '[{"name": "db-1", "zone": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-east1-b", "status": "RUNNING", "networkInterfaces": [{"networkIP": "10.0.0.2"}]}, {"name": "web-1", "zone": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-central1-a", "status": "RUNNING", "machineType": "https://www.googleapis.com/compute/v1/projects/acme/zones/us-central1-a/machineTypes/e2-medium", "networkInterfaces": [{"networkIP": "10.0.0.9"}]}]'
    fi
    ;;
"machine-types list")
    printf '%s\n' '[{"name": "e2-medium", "guestCpus": 2, "memoryMb": 4096}, {"name": "e2-standard-4", "guestCpus": 4, "memoryMb": 16384}, {"name": "n2-standard-2", "guestCpus": 2, "memoryMb": 8192}]'
    ;;
esac
exit 0
"#;

struct FakeGcloud {
    dir: TempDir,
    log: PathBuf,
}

impl FakeGcloud {
    fn install() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("gcloud");
        std::fs::write(&script, FAKE_GCLOUD).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let log = dir.path().join("calls.log");
        Self { dir, log }
    }

    /// Fake `PATH` holding nothing but a log file.
    fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        Self { dir, log }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Logged invocations, one argument string per call.
    fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

fn run_vmresize(fake: &FakeGcloud, args: &[&str], env: &[(&str, &str)], stdin: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_vmresize"));
    command
        .args(args)
        .env("PATH", fake.path())
        .env("FAKE_GCLOUD_LOG", &fake.log)
        .env("NO_COLOR", "1")
        .env_remove("VMRESIZE_GCLOUD")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command.spawn().unwrap();
    {
        let mut input = child.stdin.take().unwrap();
        // The binary may exit before reading everything.
        let _ = input.write_all(stdin.as_bytes());
    }
    child.wait_with_output().unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn custom_shape_runs_stop_set_start_in_order() {
    let fake = FakeGcloud::install();
    // project, ip, series e2, bad input, option 3 (custom), vCPUs, RAM
    let output = run_vmresize(&fake, &[], &[], "acme\n10.0.0.9\n1\nabc\n3\n4\n16\n");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Instance found: web-1"));
    assert!(stdout.contains("Selected machine type: e2-custom-4-16384"));
    assert!(stdout.contains("Invalid input. Please enter a valid number."));

    assert_eq!(
        fake.calls(),
        vec![
            "compute instances list --format=json --project=acme",
            "compute machine-types list --zones=us-central1-a --format=json --project=acme",
            "compute instances stop web-1 --project=acme --zone=us-central1-a",
            "compute instances set-machine-type web-1 --project=acme --zone=us-central1-a --machine-type=e2-custom-4-16384",
            "compute instances start web-1 --project=acme --zone=us-central1-a",
        ]
    );
}

#[test]
fn preset_selected_with_flags() {
    let fake = FakeGcloud::install();
    // series n2, option 1 (n2-standard-2)
    let output = run_vmresize(
        &fake,
        &["--project", "acme", "--ip", "10.0.0.9"],
        &[],
        "2\n1\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(fake.calls().contains(
        &"compute instances set-machine-type web-1 --project=acme --zone=us-central1-a --machine-type=n2-standard-2"
            .to_string()
    ));
}

#[test]
fn unknown_ip_exits_without_touching_instances() {
    let fake = FakeGcloud::install();
    let output = run_vmresize(&fake, &[], &[], "acme\n10.9.9.9\n1\n1\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("No instance found with IP: 10.9.9.9"));

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert!(!calls
        .iter()
        .any(|c| c.contains("instances stop") || c.contains("instances start")));
}

#[test]
fn failed_reconfigure_leaves_instance_stopped() {
    let fake = FakeGcloud::install();
    let output = run_vmresize(
        &fake,
        &["--project", "acme", "--ip", "10.0.0.9"],
        &[("FAKE_GCLOUD_FAIL", "set-machine-type")],
        "1\n1\n",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("simulated failure"));

    let calls = fake.calls();
    assert!(calls.iter().any(|c| c.contains("instances stop web-1")));
    assert!(calls.iter().any(|c| c.contains("set-machine-type web-1")));
    assert!(!calls.iter().any(|c| c.contains("instances start")));
}

#[test]
fn malformed_instance_json_is_fatal() {
    let fake = FakeGcloud::install();
    let output = run_vmresize(
        &fake,
        &["--project", "acme", "--ip", "10.0.0.9"],
        &[("FAKE_GCLOUD_BAD_JSON", "1")],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error decoding JSON"));
    assert_eq!(fake.calls().len(), 1);
}

#[test]
fn missing_gcloud_is_fatal() {
    let fake = FakeGcloud::empty();
    let output = run_vmresize(&fake, &["--project", "acme", "--ip", "10.0.0.9"], &[], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("gcloud is not installed"));
}

#[test]
fn closed_stdin_during_menu_is_fatal() {
    let fake = FakeGcloud::install();
    let output = run_vmresize(&fake, &["--project", "acme", "--ip", "10.0.0.9"], &[], "x\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(!fake.calls().iter().any(|c| c.contains("instances stop")));
}
