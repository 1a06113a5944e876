//! Search command handler

use anyhow::Result;

use crate::config::Config;
use crate::ui::table;

pub fn cmd_search(config: &Config, query: &str) -> Result<()> {
    let registry = super::open_registry(config);

    let matches = registry.search(query);
    if matches.is_empty() {
        println!("No matching devices found.");
    } else {
        println!("{}", table::render_refs(&matches));
    }
    Ok(())
}
