//! Locate command implementation
//!
//! Prints where the snapshots of a comparison can be downloaded. The CI scripts
//! fetch them; this crate never talks to the network.

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::artifacts::ArtifactEndpoints;
use crate::config::ConfigLoader;
use crate::error::ComparisonError;

/// What a comparison needs to fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocateRequest<'a> {
    /// Git ref the baseline was built from
    pub git_ref: &'a str,
    /// Merge-base commit
    pub commit: &'a str,
    /// CI build of the pull request
    pub build_id: Option<u64>,
    /// Pull request number
    pub pull_request: Option<u64>,
    /// Download URL of the pull request's snapshot artifact
    pub artifact_url: Option<&'a str>,
}

/// Labeled locations for a request
///
/// # Errors
///
/// Returns an error if the artifact URL is not an absolute URL.
pub fn locations(
    endpoints: &ArtifactEndpoints,
    request: &LocateRequest<'_>,
) -> Result<Vec<(&'static str, String)>, ComparisonError> {
    let mut found = vec![(
        "Baseline snapshot",
        endpoints.baseline_snapshot_url(request.git_ref, request.commit),
    )];
    if let Some(build_id) = request.build_id {
        found.push(("Build artifacts", endpoints.build_artifacts_url(build_id)));
    }
    if let Some(artifact_url) = request.artifact_url {
        found.push((
            "Target snapshot",
            endpoints.artifact_download_url(artifact_url)?,
        ));
    }
    if let Some(pull_request) = request.pull_request {
        found.push(("Pull request", endpoints.pull_request_url(pull_request)));
    }
    Ok(found)
}

/// Print snapshot locations from the configured endpoints
pub fn cmd_locate(project_root: &Path, request: &LocateRequest<'_>) -> Result<()> {
    let config = ConfigLoader::load(project_root)?;

    for (label, url) in locations(&config.artifacts, request)? {
        let label = format!("{:<18}", format!("{}:", label));
        println!("{} {}", style(label).bold(), url);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_include_optional_entries() {
        let endpoints = ArtifactEndpoints::default();
        let request = LocateRequest {
            git_ref: "master",
            commit: "abc123",
            build_id: Some(77),
            pull_request: Some(9),
            artifact_url: Some("https://ci.example/artifact?format=zip"),
        };

        let found = locations(&endpoints, &request).unwrap();

        let labels: Vec<_> = found.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Baseline snapshot", "Build artifacts", "Target snapshot", "Pull request"]
        );
        assert!(found[0].1.ends_with("/artifacts/master/abc123/size-snapshot.json"));
        assert!(found[1].1.contains("/builds/77/artifacts"));
        assert_eq!(
            found[2].1,
            "https://ci.example/artifact?format=file&subPath=%2Fsize-snapshot.json"
        );
        assert!(found[3].1.ends_with("/pull/9"));
    }

    #[test]
    fn test_locations_reject_relative_artifact_url() {
        let request = LocateRequest {
            git_ref: "master",
            commit: "abc123",
            artifact_url: Some("artifact?format=zip"),
            ..Default::default()
        };

        let err = locations(&ArtifactEndpoints::default(), &request).unwrap_err();
        assert!(matches!(err, ComparisonError::InvalidUrl { .. }));
    }

    #[test]
    fn test_locations_baseline_only() {
        let request = LocateRequest {
            git_ref: "next",
            commit: "f00",
            ..Default::default()
        };

        assert_eq!(
            locations(&ArtifactEndpoints::default(), &request)
                .unwrap()
                .len(),
            1
        );
    }
}
