//! DeviceStore port
//!
//! Persists the full device collection. The contract is deliberately
//! absorbing: the registry's in-memory state is the source of truth, so
//! a store that cannot be read behaves like an empty one and a failed
//! write is accepted data-loss risk, not an error the registry handles.
//! Adapters keep a `Result`-based inner layer (see `JsonDeviceStore`)
//! so the failure modes stay visible in their own tests.

use std::path::PathBuf;

use crate::domain::entities::Device;

pub trait DeviceStore: Send + Sync {
    /// Read the persisted collection. Missing file, malformed content
    /// and I/O errors all yield an empty collection.
    fn load(&self) -> Vec<Device>;

    /// Overwrite the persisted collection with `devices`, preserving
    /// order. Failures are swallowed.
    fn save_all(&self, devices: &[Device]);
}

/// Failure modes of a store adapter's inner load/save layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store: {message}")]
    Access { message: String },

    #[error("failed to serialize devices: {message}")]
    Serialization { message: String },

    #[error("store file corrupted: {path}: {message}")]
    Corrupted { path: PathBuf, message: String },
}
