//! Common test utilities for Kidari CLI tests.
//!
//! - `TestEnv`: isolated project and config directories plus a runner
//! - Fixtures: lesson logs and attendance exports used across tests

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
