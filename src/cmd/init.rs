//! Init command implementation
//!
//! Handles the `size-comparison init` command which writes a `.size-comparison.toml`
//! holding the default classifier rules, preview host and artifact endpoints.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::fmt::{CHECKMARK, WARNING};

/// What [`init_config`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A new configuration file was written
    Created,
    /// A configuration file was already present and left untouched
    AlreadyExists,
}

/// Write the default configuration unless the project already has one
pub fn init_config(project_root: &Path) -> Result<InitOutcome> {
    if ConfigLoader::exists(project_root) {
        return Ok(InitOutcome::AlreadyExists);
    }

    ConfigLoader::save(&ConfigFile::default(), project_root)?;
    Ok(InitOutcome::Created)
}

/// Initialize size-comparison configuration
///
/// # Examples
///
/// ```no_run
/// use size_comparison::cmd::init::cmd_init;
/// use std::path::Path;
///
/// cmd_init(Path::new("."))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(project_root: &Path) -> Result<()> {
    match init_config(project_root)? {
        InitOutcome::Created => {
            println!(
                "{}Created {}",
                CHECKMARK,
                style(project_root.join(CONFIG_FILE_NAME).display()).cyan()
            );
            println!("   Edit the [classifier] rules to match your bundle names.");
        }
        InitOutcome::AlreadyExists => {
            println!(
                "{}Config file already exists: {}",
                WARNING,
                style(CONFIG_FILE_NAME).cyan()
            );
            println!("   Delete it first or edit manually to update.");
        }
    }

    Ok(())
}
