//! Common test utilities and helpers
//!
//! Shared functionality for integration tests:
//! - Snapshot and config fixture creation
//! - Binary invocation
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures;
//!
//! let project = fixtures::SnapshotPair::new(fixtures::BUTTON_GROWS)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod fixtures;

use assert_cmd::Command;

/// Command for the size-comparison binary
#[allow(dead_code)]
pub fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_size-comparison"))
}
