//! vmresize CLI.
//!
//! Resizes a Compute Engine instance by shelling out to `gcloud`: find the
//! instance by IP, choose a machine type, then stop, reconfigure and start.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vmresize::{ui, ConsolePrompt, ResizeConfig, Resizer};
use vmresize_cloud::gcp::Gcloud;

/// Interactive vCPU/RAM resizer for Compute Engine instances.
#[derive(Parser)]
#[command(
    name = "vmresize",
    version,
    about = "Resize a Compute Engine instance's vCPU/RAM through gcloud",
    long_about = "Resize a Compute Engine instance's vCPU/RAM through gcloud.\n\n\
                  Finds the instance owning an internal IP, offers the machine types\n\
                  of its zone grouped by series (or a custom vCPU/RAM shape), then\n\
                  stops the instance, applies the machine type and starts it again.\n\n\
                  Anything not given as a flag is asked for interactively."
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    config: ResizeConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("info,vmresize=debug,vmresize_cloud=debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ResizeConfig) -> Result<()> {
    ui::print_banner();

    let mut prompt = ConsolePrompt::new();
    let target = config.gather(&mut prompt)?;

    let provider = Gcloud::new(target.project_id.as_str()).with_tool(config.gcloud.as_str());
    let resizer = Resizer::new(provider);
    let outcome = resizer.run(&mut prompt, &target.server_ip)?;

    ui::print_section("Resize complete");
    ui::print_kv("Instance", &outcome.instance.name);
    ui::print_kv("Zone", &outcome.instance.zone);
    ui::print_kv("Machine type", &outcome.machine_type);
    println!();

    Ok(())
}
