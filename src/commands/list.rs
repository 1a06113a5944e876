//! List command handler

use anyhow::Result;

use crate::config::Config;
use crate::ui::table;

pub fn cmd_list(config: &Config) -> Result<()> {
    let registry = super::open_registry(config);
    println!("{}", table::render(registry.devices()));
    Ok(())
}
