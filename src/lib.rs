//! devmon - single-user inventory tool for network devices
//!
//! devmon keeps an in-memory registry of devices (ID, name, IP address,
//! operational status), persists the full set to a JSON file between runs,
//! and records every registry event to an append-only log.
//!
//! The interesting part lives in [`domain`]: the registry entity, the
//! invariants it enforces (case-insensitive ID uniqueness, IPv4 validation,
//! deterministic ordering) and the ports it talks through. Everything under
//! [`infrastructure`] and [`ui`] is replaceable glue.

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Device, DeviceRegistry, DeviceStatus, StatusCounts};
pub use domain::ports::{DeviceStore, EventLog, StoreError};
pub use domain::value_objects::is_valid_ipv4;
pub use error::{DevmonError, DevmonResult};
pub use infrastructure::events::{FileEventLog, NullEventLog};
pub use infrastructure::repositories::JsonDeviceStore;
