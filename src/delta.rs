//! Per-bundle size deltas between a baseline and a target snapshot

use crate::snapshot::{SizeMetric, Snapshot};
use std::collections::BTreeMap;

/// Change of one metric of one bundle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaRecord {
    /// Size in the baseline, 0 if the bundle was added
    pub previous: u64,
    /// Size in the target, 0 if the bundle was removed
    pub current: u64,
    /// `current - previous`; negative means the bundle shrank
    pub absolute_diff: i64,
    /// `current / previous - 1`
    ///
    /// `+inf` for an added bundle, exactly `-1.0` for a removed one and `NaN` when
    /// both sides are empty.
    pub relative_diff: f64,
}

impl DeltaRecord {
    /// Compute the change from `previous` to `current`
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::delta::DeltaRecord;
    ///
    /// let added = DeltaRecord::between(0, 1000);
    /// assert_eq!(added.absolute_diff, 1000);
    /// assert_eq!(added.relative_diff, f64::INFINITY);
    ///
    /// let removed = DeltaRecord::between(1000, 0);
    /// assert_eq!(removed.relative_diff, -1.0);
    /// ```
    pub fn between(previous: u64, current: u64) -> Self {
        Self {
            previous,
            current,
            absolute_diff: (i128::from(current) - i128::from(previous))
                .clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64,
            relative_diff: current as f64 / previous as f64 - 1.0,
        }
    }

    /// True when the size did not change
    pub fn is_unchanged(&self) -> bool {
        self.absolute_diff == 0
    }
}

/// Parsed and gzip deltas of one bundle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleDelta {
    /// Change of the minified size
    pub parsed: DeltaRecord,
    /// Change of the gzipped size
    pub gzip: DeltaRecord,
}

impl BundleDelta {
    /// Compute both metric deltas for one bundle
    pub fn between(previous: SizeMetric, current: SizeMetric) -> Self {
        Self {
            parsed: DeltaRecord::between(previous.parsed, current.parsed),
            gzip: DeltaRecord::between(previous.gzip, current.gzip),
        }
    }
}

/// Compute deltas for every bundle present in either snapshot
///
/// A bundle missing from one side is compared against [`SizeMetric::ABSENT`].
pub fn compute_deltas(baseline: &Snapshot, target: &Snapshot) -> BTreeMap<String, BundleDelta> {
    baseline
        .ids()
        .chain(target.ids())
        .map(|id| {
            let previous = baseline.get(id).unwrap_or(SizeMetric::ABSENT);
            let current = target.get(id).unwrap_or(SizeMetric::ABSENT);
            (id.to_string(), BundleDelta::between(previous, current))
        })
        .collect()
}
