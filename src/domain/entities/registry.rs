//! DeviceRegistry entity
//!
//! The canonical in-memory device collection. Enforces admission
//! invariants (non-blank ID and name, valid IPv4, case-insensitive ID
//! uniqueness), keeps insertion order until an explicit sort, and
//! delegates persistence and event recording to its ports.
//!
//! Expected outcomes (duplicate, not found, invalid input) are boolean
//! results plus a log entry, never errors. Rejections are side-effect
//! free: no collection mutation, no persistence call.

use crate::domain::entities::{Device, DeviceStatus};
use crate::domain::ports::{DeviceStore, EventLog};
use crate::domain::value_objects::is_valid_ipv4;

/// Per-status totals for the report view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub online: usize,
    pub offline: usize,
    pub maintenance: usize,
}

pub struct DeviceRegistry {
    devices: Vec<Device>,
    store: Box<dyn DeviceStore>,
    log: Box<dyn EventLog>,
}

impl DeviceRegistry {
    /// Build a registry seeded from the store's persisted collection.
    pub fn load(store: Box<dyn DeviceStore>, log: Box<dyn EventLog>) -> Self {
        let devices = store.load();
        log.record(&format!("Loaded {} devices from store", devices.len()));
        Self {
            devices,
            store,
            log,
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Admit a device. Preconditions are checked in order; the first
    /// failure rejects with no mutation and no persistence.
    pub fn add(&mut self, device: Device) -> bool {
        if device.id.trim().is_empty() {
            self.log.record("Rejected add: empty device ID");
            return false;
        }
        if device.name.trim().is_empty() {
            self.log
                .record(&format!("Rejected add: empty name for ID {}", device.id));
            return false;
        }
        if !is_valid_ipv4(&device.ip_address) {
            self.log.record(&format!(
                "Rejected add: invalid IP '{}' for ID {}",
                device.ip_address, device.id
            ));
            return false;
        }
        if self.find_by_id(&device.id).is_some() {
            self.log
                .record(&format!("Rejected add: duplicate ID {}", device.id));
            return false;
        }

        let event = format!("Device added: {} ({})", device.name, device.id);
        self.devices.push(device);
        self.persist();
        self.log.record(&event);
        true
    }

    /// Case-insensitive exact ID lookup; first match wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id_matches(id))
    }

    /// Linear search: ID equals the query case-insensitively, or the
    /// name contains it as a case-insensitive substring. A blank query
    /// matches nothing - listing everything is a separate operation.
    pub fn search(&self, query: &str) -> Vec<&Device> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.devices
            .iter()
            .filter(|d| d.id_matches(query) || d.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn update_status(&mut self, id: &str, new_status: DeviceStatus) -> bool {
        let Some(device) = self.devices.iter_mut().find(|d| d.id_matches(id)) else {
            self.log
                .record(&format!("Failed to update status: no device with ID {id}"));
            return false;
        };

        let previous = device.status;
        device.status = new_status;
        let message = format!(
            "Device status updated: {} ({}) {} -> {}",
            device.name, device.id, previous, new_status
        );
        self.persist();
        self.log.record(&message);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.devices.iter().position(|d| d.id_matches(id)) else {
            self.log
                .record(&format!("Failed to remove: no device with ID {id}"));
            return false;
        };

        let device = self.devices.remove(index);
        self.persist();
        self.log.record(&format!(
            "Device removed: {} ({})",
            device.name, device.id
        ));
        true
    }

    /// Destructive in-place reorder by case-insensitive name.
    pub fn sort_by_name(&mut self) {
        self.devices
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }

    /// Destructive in-place reorder by status rank (Offline <
    /// Maintenance < Online), then case-insensitive name.
    pub fn sort_by_status_then_name(&mut self) {
        self.devices.sort_by(|a, b| {
            a.status
                .rank()
                .cmp(&b.status.rank())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
    }

    /// Dispatch on a criterion string; anything other than "name" or
    /// "status" (case-insensitive) leaves the collection untouched.
    pub fn sort_by(&mut self, criterion: &str) -> bool {
        if criterion.eq_ignore_ascii_case("name") {
            self.sort_by_name();
            self.log.record("Devices sorted by name");
            true
        } else if criterion.eq_ignore_ascii_case("status") {
            self.sort_by_status_then_name();
            self.log.record("Devices sorted by status");
            true
        } else {
            self.log
                .record(&format!("Failed to sort: invalid criterion '{criterion}'"));
            false
        }
    }

    /// Persist the current collection explicitly. Mutations persist on
    /// their own; this exists for sorts and for save-and-exit.
    pub fn save(&self) {
        self.persist();
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.devices.len(),
            ..StatusCounts::default()
        };
        for device in &self.devices {
            match device.status {
                DeviceStatus::Online => counts.online += 1,
                DeviceStatus::Offline => counts.offline += 1,
                DeviceStatus::Maintenance => counts.maintenance += 1,
            }
        }
        counts
    }

    fn persist(&self) {
        self.store.save_all(&self.devices);
    }
}
