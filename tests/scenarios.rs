//! Scenario tests for devmon.
//!
//! Multi-step journeys through the CLI, each exercising the registry,
//! store and log together the way a real session would.
//!
//! Run with: `cargo test --test scenarios`

mod common;

#[path = "scenarios/inventory_lifecycle.rs"]
mod inventory_lifecycle;

#[path = "scenarios/degraded_store.rs"]
mod degraded_store;
