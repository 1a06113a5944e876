//! Command handlers
//!
//! One module per CLI action. Each handler opens the registry from the
//! resolved configuration, performs a single operation, and reports
//! the outcome; rejected operations surface as errors so one-shot
//! invocations exit non-zero.

use anyhow::Result;

use crate::cli::Commands;
use crate::config::Config;
use crate::domain::entities::DeviceRegistry;
use crate::infrastructure::events::FileEventLog;
use crate::infrastructure::repositories::JsonDeviceStore;

pub mod add;
pub mod interactive;
pub mod list;
pub mod remove;
pub mod report;
pub mod search;
pub mod sort;
pub mod status;

pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Add {
            id,
            name,
            ip,
            status,
        } => add::cmd_add(config, &id, &name, &ip, status),
        Commands::Status { id, status } => status::cmd_status(config, &id, status),
        Commands::Search { query } => search::cmd_search(config, &query),
        Commands::Sort { criterion } => sort::cmd_sort(config, &criterion),
        Commands::Remove { id } => remove::cmd_remove(config, &id),
        Commands::List => list::cmd_list(config),
        Commands::Report => report::cmd_report(config),
    }
}

/// Wire a registry from the configured store and event log.
pub fn open_registry(config: &Config) -> DeviceRegistry {
    let store = JsonDeviceStore::new(config.storage.data_file.clone(), config.storage.backup);
    let log = FileEventLog::new(config.log.file.clone());
    DeviceRegistry::load(Box::new(store), Box::new(log))
}
