//! Configuration: what lives where on disk
//!
//! A small TOML file selecting the data file, backup policy and event
//! log path. Resolution order: explicit `--config` path, then
//! `./devmon.toml`, then the user config dir, then built-in defaults;
//! `DEVMON_*` environment variables override whatever was loaded.

mod loader;
mod types;

pub use loader::{load_or_default, load_with_warnings, ConfigWarning};
pub use types::{Config, LogConfig, StorageConfig};
