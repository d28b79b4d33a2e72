//! Size snapshot model
//!
//! A snapshot maps every bundle of one build to its parsed and gzipped byte sizes.
//! Snapshots are produced by the build (`size-snapshot.json`) and are treated as
//! immutable input by the comparison engine.

mod loader;

pub use loader::{SnapshotLoader, SnapshotRole};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Footprint of one bundle at one point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeMetric {
    /// Minified size in bytes
    pub parsed: u64,
    /// Gzipped size in bytes
    pub gzip: u64,
}

impl SizeMetric {
    /// Size used for a bundle missing from one side of a comparison
    pub const ABSENT: Self = Self { parsed: 0, gzip: 0 };

    /// Create a metric from parsed and gzip sizes
    pub fn new(parsed: u64, gzip: u64) -> Self {
        Self { parsed, gzip }
    }
}

/// Errors raised while decoding a snapshot document
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The document is not an object of `{ parsed, gzip }` byte counts
    #[error("malformed size snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Bundle identifier to size mapping for one build
///
/// # Examples
///
/// ```
/// use size_comparison::snapshot::{SizeMetric, Snapshot};
///
/// let snapshot = Snapshot::from_json(r#"{ "@lib/core/Button.esm": { "parsed": 1200, "gzip": 480 } }"#)?;
/// assert_eq!(snapshot.get("@lib/core/Button.esm"), Some(SizeMetric::new(1200, 480)));
/// # Ok::<(), size_comparison::snapshot::SnapshotError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    bundles: BTreeMap<String, SizeMetric>,
}

impl Snapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a snapshot from its JSON document
    pub fn from_json(contents: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Record the size of a bundle, replacing any previous entry
    pub fn insert(&mut self, id: impl Into<String>, metric: SizeMetric) {
        self.bundles.insert(id.into(), metric);
    }

    /// Size of a bundle, if present
    pub fn get(&self, id: &str) -> Option<SizeMetric> {
        self.bundles.get(id).copied()
    }

    /// Whether the snapshot contains a bundle
    pub fn contains(&self, id: &str) -> bool {
        self.bundles.contains_key(id)
    }

    /// Bundle identifiers in lexical order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Bundles with their sizes in lexical order of identifier
    pub fn iter(&self) -> impl Iterator<Item = (&str, SizeMetric)> {
        self.bundles.iter().map(|(id, metric)| (id.as_str(), *metric))
    }

    /// Number of bundles
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// True when the snapshot has no bundles
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SizeMetric)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, SizeMetric)>>(iter: I) -> Self {
        Self {
            bundles: iter.into_iter().map(|(id, m)| (id.into(), m)).collect(),
        }
    }
}
