//! Common test utilities for devmon integration tests.
//!
//! `TestEnv` gives every test an isolated temp directory and runs the
//! compiled binary with `DEVMON_*` overrides pointing into it.

// each test binary uses a different subset of the helpers
#[allow(dead_code)]
pub mod env;

#[allow(unused_imports)]
pub use env::*;
