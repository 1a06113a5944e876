//! Configuration loading and resolution

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DevmonError, DevmonResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> DevmonResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DevmonError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration: explicit path, project file, user file, or
/// defaults - in that order - then apply `DEVMON_*` env overrides.
///
/// An explicit path that is missing or malformed is an error; the
/// implicit locations fall through silently.
pub fn load_or_default(explicit: Option<&Path>) -> DevmonResult<Config> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(DevmonError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(with_env_overrides(Config::load(path)?));
    }

    let project_config = Path::new("devmon.toml");
    if project_config.exists() {
        if let Ok(config) = Config::load(project_config) {
            return Ok(with_env_overrides(config));
        }
    }

    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("devmon/config.toml");
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                return Ok(with_env_overrides(config));
            }
        }
    }

    Ok(with_env_overrides(Config::default()))
}

/// Apply environment variable overrides (DEVMON_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Override application with an injectable lookup, so tests do not
/// have to mutate the process environment.
pub(super) fn with_overrides_from(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(path) = lookup("DEVMON_DATA_FILE") {
        config.storage.data_file = PathBuf::from(path);
    }

    if let Some(backup) = lookup("DEVMON_BACKUP") {
        match backup.to_lowercase().as_str() {
            "true" | "1" | "yes" => config.storage.backup = true,
            "false" | "0" | "no" => config.storage.backup = false,
            _ => {}
        }
    }

    if let Some(path) = lookup("DEVMON_LOG_FILE") {
        config.log.file = PathBuf::from(path);
    }

    config
}
