//! Command handlers for the size-comparison CLI
//!
//! Each submodule handles a specific CLI command.

pub mod classify;
pub mod compare;
pub mod completions;
pub mod init;
pub mod locate;

pub use classify::cmd_classify;
pub use compare::{cmd_compare, OutputFormat};
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use locate::{cmd_locate, LocateRequest};
