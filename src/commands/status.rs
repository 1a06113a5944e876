//! Status command handler

use anyhow::{bail, Result};

use crate::config::Config;
use crate::domain::entities::DeviceStatus;

pub fn cmd_status(config: &Config, id: &str, status: DeviceStatus) -> Result<()> {
    let mut registry = super::open_registry(config);

    if !registry.update_status(id, status) {
        bail!("no device with ID '{id}'");
    }

    println!("Status updated: {id} -> {status}");
    Ok(())
}
