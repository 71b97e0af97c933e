//! Error types for the runner.

use crate::config::ConfigError;
use santa_core::SantaError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Santa(#[from] SantaError),
    #[error("Failed to init logging: {0}")]
    Telemetry(String),
}

pub type CliResult<T> = Result<T, CliError>;
