//! Device entity - identity plus operational status

use std::fmt;
use std::str::FromStr;

use crate::error::DevmonError;

/// Operational status of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DeviceStatus {
    Offline,
    Maintenance,
    Online,
}

impl DeviceStatus {
    /// Sort rank: Offline < Maintenance < Online.
    ///
    /// This is an explicit table, independent of the variant declaration
    /// order - `sort_by_status_then_name` relies on it.
    pub fn rank(&self) -> u8 {
        match self {
            DeviceStatus::Offline => 0,
            DeviceStatus::Maintenance => 1,
            DeviceStatus::Online => 2,
        }
    }

    /// The variant name as persisted in the store
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Offline => "Offline",
            DeviceStatus::Maintenance => "Maintenance",
            DeviceStatus::Online => "Online",
        }
    }
}

impl Default for DeviceStatus {
    fn default() -> Self {
        DeviceStatus::Offline
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = DevmonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(DeviceStatus::Offline),
            "maintenance" => Ok(DeviceStatus::Maintenance),
            "online" => Ok(DeviceStatus::Online),
            _ => Err(DevmonError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A single inventory entry.
///
/// Uniqueness and validation are enforced by the registry at admission,
/// not by this type - a freestanding `Device` carries no guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub ip_address: String,
    pub status: DeviceStatus,
}

impl Device {
    /// Create a device with the default Offline status
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        Self::with_status(id, name, ip_address, DeviceStatus::default())
    }

    pub fn with_status(
        id: impl Into<String>,
        name: impl Into<String>,
        ip_address: impl Into<String>,
        status: DeviceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ip_address: ip_address.into(),
            status,
        }
    }

    /// Case-insensitive ID comparison, the registry's identity relation
    pub fn id_matches(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }
}
