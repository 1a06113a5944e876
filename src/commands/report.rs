//! Report command handler

use anyhow::Result;

use crate::config::Config;
use crate::ui::table;

pub fn cmd_report(config: &Config) -> Result<()> {
    let registry = super::open_registry(config);
    println!("{}", table::render_report(&registry.status_counts()));
    Ok(())
}
