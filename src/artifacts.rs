//! Where size snapshots and related pages live
//!
//! Snapshots are downloaded by CI scripts before a comparison runs: the baseline from
//! object storage keyed by ref and commit, the target from the pull request's CI build
//! artifacts. This module only builds those locations from configured endpoints.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ComparisonError;

/// Endpoints of the services holding snapshots and pull requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArtifactEndpoints {
    /// Base URL of the object storage bucket holding baseline snapshots
    #[serde(default = "default_object_storage")]
    pub object_storage: String,

    /// Base URL of the CI project API (organization and project included)
    #[serde(default = "default_ci_api")]
    pub ci_api: String,

    /// `owner/name` of the repository on GitHub
    #[serde(default = "default_repository")]
    pub repository: String,

    /// File name of the snapshot inside an artifact
    #[serde(default = "default_snapshot_name")]
    pub snapshot_name: String,
}

fn default_object_storage() -> String {
    "https://s3.eu-central-1.amazonaws.com/lib-artifacts".to_string()
}

fn default_ci_api() -> String {
    "https://dev.azure.com/lib-org/lib".to_string()
}

fn default_repository() -> String {
    "lib-org/lib".to_string()
}

fn default_snapshot_name() -> String {
    "size-snapshot.json".to_string()
}

impl Default for ArtifactEndpoints {
    fn default() -> Self {
        Self {
            object_storage: default_object_storage(),
            ci_api: default_ci_api(),
            repository: default_repository(),
            snapshot_name: default_snapshot_name(),
        }
    }
}

impl ArtifactEndpoints {
    /// Location of the baseline snapshot uploaded for `git_ref` at `commit`
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::artifacts::ArtifactEndpoints;
    ///
    /// let endpoints = ArtifactEndpoints::default();
    /// assert_eq!(
    ///     endpoints.baseline_snapshot_url("master", "abc123"),
    ///     "https://s3.eu-central-1.amazonaws.com/lib-artifacts/artifacts/master/abc123/size-snapshot.json"
    /// );
    /// ```
    pub fn baseline_snapshot_url(&self, git_ref: &str, commit: &str) -> String {
        format!(
            "{}/artifacts/{}/{}/{}",
            trim_slash(&self.object_storage),
            git_ref,
            commit,
            self.snapshot_name
        )
    }

    /// CI API listing the artifacts of a build
    pub fn build_artifacts_url(&self, build_id: u64) -> String {
        format!(
            "{}/_apis/build/builds/{}/artifacts?api-version=5.1",
            trim_slash(&self.ci_api),
            build_id
        )
    }

    /// Direct download of the snapshot file from an artifact's download URL
    ///
    /// Existing `format` and `subPath` parameters are replaced; other parameters and
    /// the fragment are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidUrl`] if `download_url` is not an absolute URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::artifacts::ArtifactEndpoints;
    ///
    /// let endpoints = ArtifactEndpoints::default();
    /// assert_eq!(
    ///     endpoints.artifact_download_url("https://ci.example/artifact?format=zip")?,
    ///     "https://ci.example/artifact?format=file&subPath=%2Fsize-snapshot.json"
    /// );
    /// # Ok::<(), size_comparison::error::ComparisonError>(())
    /// ```
    pub fn artifact_download_url(&self, download_url: &str) -> Result<String, ComparisonError> {
        let mut url = Url::parse(download_url).map_err(|source| ComparisonError::InvalidUrl {
            url: download_url.to_string(),
            source,
        })?;

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "format" && key != "subPath")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        {
            let mut query = url.query_pairs_mut();
            query.clear();
            for (key, value) in &kept {
                query.append_pair(key, value);
            }
            query
                .append_pair("format", "file")
                .append_pair("subPath", &format!("/{}", self.snapshot_name));
        }

        Ok(url.into())
    }

    /// Pull request page on GitHub
    pub fn pull_request_url(&self, pull_request: u64) -> String {
        format!(
            "https://github.com/{}/pull/{}",
            self.repository, pull_request
        )
    }
}

fn trim_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}
