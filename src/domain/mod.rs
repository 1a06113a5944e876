//! Domain Layer
//!
//! The core of devmon - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Device, DeviceRegistry)
//! - `value_objects/` - Immutable value types (IPv4 predicate)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - Persistence and event logging go through
//!    trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
