//! Remove command handler

use anyhow::{bail, Result};

use crate::config::Config;

pub fn cmd_remove(config: &Config, id: &str) -> Result<()> {
    let mut registry = super::open_registry(config);

    if !registry.remove(id) {
        bail!("no device with ID '{id}'");
    }

    println!("Device removed: {id}");
    Ok(())
}
