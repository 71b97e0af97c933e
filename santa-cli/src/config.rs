//! Configuration loading for the Secret Santa runner.
//!
//! Every field has a default, so running without a config file reads
//! `participants.txt` and writes into `matching/` under the working directory.

use santa_core::DerangementStrategy;
use santa_storage::RecordFormat;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SECRET_SANTA_CONFIG";

pub const DEFAULT_PARTICIPANTS_PATH: &str = "participants.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "matching";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SantaConfig {
    /// Participant list, one name per line.
    pub participants_path: PathBuf,
    /// Directory receiving one record per giver.
    pub output_dir: PathBuf,
    /// Right-pad recipient names to a common width.
    pub pad_records: bool,
    pub strategy: DerangementStrategy,
    /// Fixed RNG seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Default for SantaConfig {
    fn default() -> Self {
        Self {
            participants_path: PathBuf::from(DEFAULT_PARTICIPANTS_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pad_records: false,
            strategy: DerangementStrategy::default(),
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing value after {flag}")]
    MissingArgument { flag: &'static str },
    #[error("Unrecognized argument: {0}")]
    UnknownArgument(String),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl SantaConfig {
    /// Load from `--config <path>`, else `SECRET_SANTA_CONFIG`, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let from_args = config_path_from_args(std::env::args().skip(1))?;
        let path = from_args.or_else(config_path_from_env);
        let config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.participants_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "participants_path",
                reason: "must not be empty".to_string(),
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output_dir",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn record_format(&self) -> RecordFormat {
        RecordFormat {
            pad_to_widest: self.pad_records,
        }
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV).ok().map(PathBuf::from)
}

/// The only recognized argument is `--config <path>`.
pub fn config_path_from_args<I>(args: I) -> Result<Option<PathBuf>, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut path = None;
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let value = args
                .next()
                .ok_or(ConfigError::MissingArgument { flag: "--config" })?;
            path = Some(PathBuf::from(value));
        } else {
            return Err(ConfigError::UnknownArgument(arg));
        }
    }
    Ok(path)
}
