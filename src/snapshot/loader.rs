//! Snapshot document loading (I/O)

use super::Snapshot;
use crate::error::ComparisonError;
use crate::infra::{FileSystem, RealFileSystem};
use log::{debug, warn};
use std::fmt;
use std::path::Path;

/// Which side of the comparison a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotRole {
    /// Snapshot of the base commit the pull request is compared against
    Baseline,
    /// Snapshot produced by the pull request's build
    Target,
}

impl fmt::Display for SnapshotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => f.write_str("baseline"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Reads snapshot documents that the fetch layer has already downloaded
pub struct SnapshotLoader<FS: FileSystem = RealFileSystem> {
    fs: FS,
    pull_request: Option<u64>,
}

impl SnapshotLoader<RealFileSystem> {
    /// Create a loader backed by the real filesystem
    pub fn new() -> Self {
        Self::with_fs(RealFileSystem)
    }
}

impl Default for SnapshotLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<FS: FileSystem> SnapshotLoader<FS> {
    /// Create a loader with a custom filesystem implementation
    pub fn with_fs(fs: FS) -> Self {
        Self {
            fs,
            pull_request: None,
        }
    }

    /// Attach the pull request being compared, used in not-found diagnostics
    pub fn for_pull_request(mut self, pull_request: Option<u64>) -> Self {
        self.pull_request = pull_request;
        self
    }

    /// Load and decode one snapshot document
    ///
    /// # Errors
    ///
    /// - [`ComparisonError::SnapshotNotFound`] if the file does not exist
    /// - [`ComparisonError::MalformedSnapshot`] if it is not a valid snapshot
    /// - [`ComparisonError::Io`] for any other read failure
    pub fn load(&self, path: &Path, role: SnapshotRole) -> Result<Snapshot, ComparisonError> {
        let contents = match self.fs.read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ComparisonError::SnapshotNotFound {
                    path: path.to_path_buf(),
                    role,
                    pull_request: self.pull_request,
                });
            }
            Err(e) => {
                return Err(ComparisonError::Io {
                    context: format!("reading {} snapshot {}", role, path.display()),
                    source: e,
                });
            }
        };

        let snapshot =
            Snapshot::from_json(&contents).map_err(|source| ComparisonError::MalformedSnapshot {
                path: path.to_path_buf(),
                source,
            })?;

        if snapshot.is_empty() {
            warn!("{} snapshot {} contains no bundles", role, path.display());
        }
        debug!(
            "Loaded {} snapshot from {} ({} bundles)",
            role,
            path.display(),
            snapshot.len()
        );

        Ok(snapshot)
    }
}
