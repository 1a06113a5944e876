//! Immutable value types

pub mod ip;

pub use ip::is_valid_ipv4;
