pub mod device;
pub mod registry;

pub use device::{Device, DeviceStatus};
pub use registry::{DeviceRegistry, StatusCounts};
