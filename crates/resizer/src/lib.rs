//! vmresize library.
//!
//! Interactive resizing of a Compute Engine instance's vCPU / RAM shape:
//! locate the instance by internal IP, pick a predefined or custom machine
//! type, then stop, reconfigure and restart it through `gcloud`.
//!
//! # Example
//!
//! ```ignore
//! use vmresize::{ConsolePrompt, Resizer};
//! use vmresize_cloud::gcp::Gcloud;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut prompt = ConsolePrompt::new();
//!     let resizer = Resizer::new(Gcloud::new("my-project"));
//!     resizer.run(&mut prompt, "10.128.0.7")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod machine_config;
pub mod menu;
pub mod orchestrator;
pub mod prompt;
pub mod ui;

// Re-export commonly used types at the crate root
pub use config::{ResizeConfig, Target};
pub use machine_config::{custom_machine_type, SeriesCatalog};
pub use orchestrator::{ResizeOutcome, Resizer};
pub use prompt::{ConsolePrompt, Prompt, PromptError};
