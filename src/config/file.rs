//! Configuration file data structures

use crate::artifacts::ArtifactEndpoints;
use crate::classify::{Classifier, DEFAULT_PAGE_PREFIX};
use crate::error::ComparisonError;
use crate::report::{PreviewHost, ReportContext, PR_PLACEHOLDER};
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".size-comparison.toml";

/// size-comparison configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Bundle classification rules
    #[serde(default)]
    pub classifier: ClassifierSettings,

    /// Preview deployment host
    #[serde(default)]
    pub preview: PreviewSettings,

    /// Snapshot storage and CI endpoints
    #[serde(default)]
    pub artifacts: ArtifactEndpoints,
}

/// Classification rule settings
///
/// Rules are applied in a fixed order: overrides, prefix stripping, suffix stripping,
/// then rewrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClassifierSettings {
    /// Namespace marking documentation page bundles
    pub page_prefix: String,

    /// Leading namespaces removed from module labels
    pub strip_prefixes: Vec<String>,

    /// Trailing suffixes removed from module labels
    pub strip_suffixes: Vec<String>,

    /// Fixed labels for exact identifiers
    pub overrides: Vec<LabelOverride>,

    /// Regular expression rewrites of module labels
    pub rewrites: Vec<LabelRewrite>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            page_prefix: DEFAULT_PAGE_PREFIX.to_string(),
            strip_prefixes: vec!["@lib/core/".to_string()],
            strip_suffixes: vec![".esm".to_string()],
            overrides: vec![
                LabelOverride::new("packages/lib/build/umd/lib.production.min.js", "@lib/core[umd]"),
                LabelOverride::new("@lib/core/Textarea", "TextareaAutosize"),
                LabelOverride::new("docs.main", "docs:/_app"),
                LabelOverride::new("docs.landing", "docs:/"),
            ],
            rewrites: Vec::new(),
        }
    }
}

/// Exact identifier to label mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelOverride {
    /// Bundle identifier
    pub id: String,
    /// Label shown instead
    pub label: String,
}

impl LabelOverride {
    /// Create an override
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Regular expression label rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRewrite {
    /// Pattern in regex crate syntax
    pub pattern: String,
    /// Replacement; `$1` refers to capture groups
    #[serde(default)]
    pub replacement: String,
}

/// Preview deployment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PreviewSettings {
    /// Preview host with a `{pr}` placeholder
    pub url_template: String,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            url_template: PreviewHost::default().template().to_string(),
        }
    }
}

impl ClassifierSettings {
    /// Build the classifier described by these settings
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidConfig`] for an empty page prefix and
    /// [`ComparisonError::InvalidRule`] for a rewrite pattern that does not compile.
    pub fn to_classifier(&self) -> Result<Classifier, ComparisonError> {
        let mut builder = Classifier::builder(self.page_prefix.clone());

        for entry in &self.overrides {
            builder = builder.override_label(entry.id.clone(), entry.label.clone());
        }
        for prefix in &self.strip_prefixes {
            builder = builder.strip_prefix(prefix.clone());
        }
        for suffix in &self.strip_suffixes {
            builder = builder.strip_suffix(suffix.clone());
        }
        for rewrite in &self.rewrites {
            builder = builder.rewrite(&rewrite.pattern, rewrite.replacement.clone())?;
        }

        builder.build()
    }
}

impl PreviewSettings {
    /// Validate the URL template
    pub fn validate(&self) -> Result<(), ComparisonError> {
        if !self.url_template.contains(PR_PLACEHOLDER) {
            return Err(ComparisonError::InvalidConfig {
                message: format!(
                    "preview url-template must contain {} (got '{}')",
                    PR_PLACEHOLDER, self.url_template
                ),
            });
        }
        Ok(())
    }

    /// Preview host described by these settings
    pub fn host(&self) -> PreviewHost {
        PreviewHost::new(self.url_template.clone())
    }
}

impl ConfigFile {
    /// Check that every section is usable
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::config::ConfigFile;
    ///
    /// let mut config = ConfigFile::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.preview.url_template = "https://preview.example".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ComparisonError> {
        self.preview.validate()?;
        self.classifier.to_classifier()?;
        Ok(())
    }

    /// Comparison context for a pull request
    pub fn report_context(&self, pull_request: Option<u64>) -> Result<ReportContext, ComparisonError> {
        self.preview.validate()?;
        Ok(ReportContext {
            pull_request,
            preview: self.preview.host(),
            classifier: self.classifier.to_classifier()?,
        })
    }
}
