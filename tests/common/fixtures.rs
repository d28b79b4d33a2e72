//! Test fixture helpers for snapshot comparisons
//!
//! Provides temporary project directories holding a baseline snapshot, a target
//! snapshot and optionally a `.size-comparison.toml`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Baseline and target documents for one comparison
pub type Fixture = (&'static str, &'static str);

/// One module grows by a quarter, one page shrinks
pub const BUTTON_GROWS: Fixture = (
    r#"{
  "@lib/core/Button.esm": { "parsed": 1000, "gzip": 400 },
  "docs:/getting-started": { "parsed": 5000, "gzip": 2000 }
}"#,
    r#"{
  "@lib/core/Button.esm": { "parsed": 1250, "gzip": 400 },
  "docs:/getting-started": { "parsed": 4500, "gzip": 1900 }
}"#,
);

/// Identical snapshots
pub const UNCHANGED: Fixture = (
    r#"{ "@lib/core/Chip.esm": { "parsed": 1500, "gzip": 600 } }"#,
    r#"{ "@lib/core/Chip.esm": { "parsed": 1500, "gzip": 600 } }"#,
);

/// One bundle removed, one added
pub const ADDED_AND_REMOVED: Fixture = (
    r#"{ "@lib/core/Legacy.esm": { "parsed": 1000, "gzip": 400 } }"#,
    r#"{ "@lib/core/Fresh.esm": { "parsed": 2000, "gzip": 700 } }"#,
);

/// A temporary project directory with two snapshots
pub struct SnapshotPair {
    dir: TempDir,
    /// Path of the baseline snapshot
    pub baseline: PathBuf,
    /// Path of the target snapshot
    pub target: PathBuf,
}

impl SnapshotPair {
    /// Write both documents of a fixture into a new temporary directory
    pub fn new((baseline, target): Fixture) -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let baseline_path = write_file(dir.path(), "baseline.json", baseline)?;
        let target_path = write_file(dir.path(), "target.json", target)?;

        Ok(Self {
            dir,
            baseline: baseline_path,
            target: target_path,
        })
    }

    /// Project root holding the snapshots
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a `.size-comparison.toml` into the project root
    pub fn with_config(self, contents: &str) -> anyhow::Result<Self> {
        write_file(self.dir.path(), ".size-comparison.toml", contents)?;
        Ok(self)
    }

    /// Overwrite the target snapshot
    pub fn with_target(self, contents: &str) -> anyhow::Result<Self> {
        fs::write(&self.target, contents)?;
        Ok(self)
    }

    /// Delete the target snapshot, as when a CI build has not finished
    pub fn without_target(self) -> anyhow::Result<Self> {
        fs::remove_file(&self.target)?;
        Ok(self)
    }
}

/// Write a file and return its path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}
