//! Add command handler

use anyhow::{bail, Result};

use crate::config::Config;
use crate::domain::entities::{Device, DeviceStatus};
use crate::domain::value_objects::is_valid_ipv4;

pub fn cmd_add(
    config: &Config,
    id: &str,
    name: &str,
    ip: &str,
    status: Option<DeviceStatus>,
) -> Result<()> {
    let mut registry = super::open_registry(config);

    // diagnose up front so the failure message names the actual problem
    if id.trim().is_empty() {
        bail!("device ID must not be empty");
    }
    if name.trim().is_empty() {
        bail!("device name must not be empty");
    }
    if !is_valid_ipv4(ip) {
        bail!("'{ip}' is not a valid IPv4 address");
    }
    if registry.find_by_id(id).is_some() {
        bail!("a device with ID '{id}' already exists");
    }

    let device = Device::with_status(id, name, ip, status.unwrap_or_default());
    if !registry.add(device) {
        bail!("failed to add device");
    }

    println!("Device added: {name} ({id})");
    Ok(())
}
