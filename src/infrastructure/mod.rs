//! Infrastructure Layer
//!
//! Concrete adapters behind the domain ports: the JSON file store and
//! the append-only event log.

pub mod events;
pub mod repositories;
