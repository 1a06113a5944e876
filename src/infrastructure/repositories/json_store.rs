//! JSON Device Store
//!
//! Persists the device collection as a pretty-printed JSON array of
//! PascalCase objects, the format the original data files use:
//!
//! ```json
//! [ { "Id": "A1", "Name": "Sensor 1", "IpAddress": "10.0.0.1", "Status": "Offline" } ]
//! ```
//!
//! `try_load`/`try_save` expose the real failure modes; the
//! `DeviceStore` impl absorbs them per the port contract. When backup
//! is enabled the previous file is copied to
//! `<stem>_backup_YYYYMMDD_HHMMSS.<ext>` before each overwrite.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Device, DeviceStatus};
use crate::domain::ports::{DeviceStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum JsonStatus {
    Offline,
    Maintenance,
    Online,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct JsonDevice {
    id: String,
    name: String,
    ip_address: String,
    #[serde(default = "default_status")]
    status: JsonStatus,
}

fn default_status() -> JsonStatus {
    JsonStatus::Offline
}

pub struct JsonDeviceStore {
    path: PathBuf,
    backup_enabled: bool,
}

impl JsonDeviceStore {
    pub fn new(path: PathBuf, backup_enabled: bool) -> Self {
        Self {
            path,
            backup_enabled,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<Vec<Device>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;

        let wire: Vec<JsonDevice> =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(wire.into_iter().map(from_wire).collect())
    }

    pub fn try_save(&self, devices: &[Device]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Access {
                    message: e.to_string(),
                })?;
            }
        }

        if self.backup_enabled && self.path.exists() {
            let backup = backup_path(&self.path, Local::now());
            fs::copy(&self.path, backup).map_err(|e| StoreError::Access {
                message: e.to_string(),
            })?;
        }

        let wire: Vec<JsonDevice> = devices.iter().map(to_wire).collect();
        let content =
            serde_json::to_string_pretty(&wire).map_err(|e| StoreError::Serialization {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| StoreError::Access {
            message: e.to_string(),
        })?;

        Ok(())
    }
}

impl DeviceStore for JsonDeviceStore {
    fn load(&self) -> Vec<Device> {
        self.try_load().unwrap_or_default()
    }

    fn save_all(&self, devices: &[Device]) {
        // Best-effort by contract: in-memory state stays the source of
        // truth when the write fails.
        let _ = self.try_save(devices);
    }
}

/// `devices.json` -> `devices_backup_20260824_153000.json`
fn backup_path(path: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let timestamp = now.format("%Y%m%d_%H%M%S");
    let mut name = format!("{stem}_backup_{timestamp}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

fn from_wire(wire: JsonDevice) -> Device {
    Device {
        id: wire.id,
        name: wire.name,
        ip_address: wire.ip_address,
        status: match wire.status {
            JsonStatus::Offline => DeviceStatus::Offline,
            JsonStatus::Maintenance => DeviceStatus::Maintenance,
            JsonStatus::Online => DeviceStatus::Online,
        },
    }
}

fn to_wire(device: &Device) -> JsonDevice {
    JsonDevice {
        id: device.id.clone(),
        name: device.name.clone(),
        ip_address: device.ip_address.clone(),
        status: match device.status {
            DeviceStatus::Offline => JsonStatus::Offline,
            DeviceStatus::Maintenance => JsonStatus::Maintenance,
            DeviceStatus::Online => JsonStatus::Online,
        },
    }
}
