//! Secret Santa runner library.
//!
//! Reads the participant list, draws a derangement and writes one record per
//! giver. The binary in `main.rs` is a thin wrapper around [`run`].

pub mod config;
pub mod error;
pub mod run;
pub mod telemetry;

pub use config::{ConfigError, SantaConfig};
pub use error::{CliError, CliResult};
pub use run::{run, RunSummary};
