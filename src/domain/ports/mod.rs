//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod device_store;
pub mod event_log;

pub use device_store::{DeviceStore, StoreError};
pub use event_log::EventLog;
