//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DevmonResult;

/// Top-level configuration, passed explicitly at construction time -
/// there is no ambient configuration object anywhere else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Where the device collection lives and whether to snapshot it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            backup: true,
        }
    }
}

/// Where registry events are appended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl Config {
    /// Load from a TOML file, discarding unknown-key warnings
    pub fn load(path: &Path) -> DevmonResult<Self> {
        let (config, _warnings) = super::loader::load_with_warnings(path)?;
        Ok(config)
    }
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/devices.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("events.log")
}

fn default_true() -> bool {
    true
}
