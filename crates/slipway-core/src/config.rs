use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Optional user config; every workflow value it carries is a default that
/// the form can still override.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlipwayConfig {
    pub version: u32,
    #[serde(default)]
    pub defaults: WorkflowDefaults,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkflowDefaults {
    #[serde(default)]
    pub fork_target: String,
    #[serde(default)]
    pub gitlab_namespace: String,
    #[serde(default)]
    pub clone_path: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve home directory for config path")]
    HomeDirectoryUnavailable,
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {message}")]
    Validation { message: String },
}

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(base_dirs
        .home_dir()
        .join(".config")
        .join("slipway")
        .join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<SlipwayConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: SlipwayConfig = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&parsed)?;
    Ok(parsed)
}

fn validate_config(config: &SlipwayConfig) -> Result<(), ConfigError> {
    if config.version != 1 {
        return Err(ConfigError::Validation {
            message: format!("unsupported config version {}", config.version),
        });
    }
    Ok(())
}
