//! Sort command handler

use anyhow::{bail, Result};

use crate::config::Config;
use crate::ui::table;

pub fn cmd_sort(config: &Config, criterion: &str) -> Result<()> {
    let mut registry = super::open_registry(config);

    if !registry.sort_by(criterion) {
        bail!("invalid sort criterion '{criterion}' - use 'name' or 'status'");
    }

    // sorting is destructive, so the new order must reach the store
    registry.save();
    println!("{}", table::render(registry.devices()));
    Ok(())
}
