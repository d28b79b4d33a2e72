//! Bundle classification and display labels
//!
//! Bundle identifiers follow a naming convention: pages of the documentation site are
//! prefixed with a page namespace (`docs:/getting-started`), everything else is a
//! library module (`@lib/core/Button.esm`). Module labels are shortened through an
//! ordered rule table so reports stay readable.

use crate::error::ComparisonError;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Page namespace used when none is configured
pub const DEFAULT_PAGE_PREFIX: &str = "docs:";

/// Report section a bundle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Library modules and shared chunks
    Main,
    /// Documentation pages
    Page,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("main"),
            Self::Page => f.write_str("page"),
        }
    }
}

/// Category and display label of one bundle identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Report section
    pub category: Category,
    /// Shortened name shown in reports
    pub label: String,
}

impl Classification {
    /// URL path of a page bundle, used to link its preview deployment
    pub fn page_path(&self) -> Option<&str> {
        (self.category == Category::Page && self.label.starts_with('/'))
            .then_some(self.label.as_str())
    }
}

/// One entry of the label rule table
#[derive(Debug, Clone)]
pub enum LabelRule {
    /// An exact identifier mapped to a fixed label; ends evaluation
    Override {
        /// Bundle identifier to match
        id: String,
        /// Label to use instead
        label: String,
    },
    /// Remove a leading namespace
    StripPrefix(String),
    /// Remove a trailing module suffix
    StripSuffix(String),
    /// Replace the first match of a pattern
    Rewrite {
        /// Compiled pattern
        pattern: Regex,
        /// Replacement, may reference capture groups (`$1`)
        replacement: String,
    },
}

/// Maps bundle identifiers to a category and label
///
/// # Examples
///
/// ```
/// use size_comparison::classify::{Category, Classifier};
///
/// let classifier = Classifier::default();
///
/// let page = classifier.classify("docs:/getting-started");
/// assert_eq!(page.category, Category::Page);
/// assert_eq!(page.label, "/getting-started");
///
/// let module = classifier.classify("@lib/core/Button.esm");
/// assert_eq!(module.category, Category::Main);
/// assert_eq!(module.label, "Button");
/// ```
#[derive(Debug, Clone)]
pub struct Classifier {
    page_prefix: String,
    rules: Vec<LabelRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            page_prefix: DEFAULT_PAGE_PREFIX.to_string(),
            rules: vec![
                LabelRule::Override {
                    id: "packages/lib/build/umd/lib.production.min.js".to_string(),
                    label: "@lib/core[umd]".to_string(),
                },
                LabelRule::Override {
                    id: "@lib/core/Textarea".to_string(),
                    label: "TextareaAutosize".to_string(),
                },
                LabelRule::Override {
                    id: "docs.main".to_string(),
                    label: "docs:/_app".to_string(),
                },
                LabelRule::Override {
                    id: "docs.landing".to_string(),
                    label: "docs:/".to_string(),
                },
                LabelRule::StripPrefix("@lib/core/".to_string()),
                LabelRule::StripSuffix(".esm".to_string()),
            ],
        }
    }
}

impl Classifier {
    /// Start an empty rule table with the given page namespace
    pub fn builder(page_prefix: impl Into<String>) -> ClassifierBuilder {
        ClassifierBuilder {
            page_prefix: page_prefix.into(),
            rules: Vec::new(),
        }
    }

    /// Classify a bundle identifier
    pub fn classify(&self, id: &str) -> Classification {
        if let Some(rest) = id.strip_prefix(self.page_prefix.as_str()) {
            let label = if rest.starts_with('/') { rest } else { id };
            return Classification {
                category: Category::Page,
                label: label.to_string(),
            };
        }

        Classification {
            category: Category::Main,
            label: self.main_label(id),
        }
    }

    fn main_label(&self, id: &str) -> String {
        let mut label = id.to_string();
        for rule in &self.rules {
            match rule {
                LabelRule::Override { id: matched, label: fixed } => {
                    if matched == id {
                        return fixed.clone();
                    }
                }
                LabelRule::StripPrefix(prefix) => {
                    if let Some(rest) = label.strip_prefix(prefix.as_str()) {
                        label = rest.to_string();
                    }
                }
                LabelRule::StripSuffix(suffix) => {
                    if let Some(rest) = label.strip_suffix(suffix.as_str()) {
                        label = rest.to_string();
                    }
                }
                LabelRule::Rewrite {
                    pattern,
                    replacement,
                } => {
                    label = pattern.replace(&label, replacement.as_str()).into_owned();
                }
            }
        }
        label
    }
}

/// Builds a [`Classifier`] rule by rule
#[derive(Debug)]
pub struct ClassifierBuilder {
    page_prefix: String,
    rules: Vec<LabelRule>,
}

impl ClassifierBuilder {
    /// Map an exact identifier to a fixed label
    pub fn override_label(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.rules.push(LabelRule::Override {
            id: id.into(),
            label: label.into(),
        });
        self
    }

    /// Strip a leading namespace from module labels
    pub fn strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.rules.push(LabelRule::StripPrefix(prefix.into()));
        self
    }

    /// Strip a trailing suffix from module labels
    pub fn strip_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.rules.push(LabelRule::StripSuffix(suffix.into()));
        self
    }

    /// Rewrite module labels with a regular expression
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidRule`] if the pattern does not compile.
    pub fn rewrite(
        mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, ComparisonError> {
        let compiled = Regex::new(pattern).map_err(|source| ComparisonError::InvalidRule {
            pattern: pattern.to_string(),
            source,
        })?;
        self.rules.push(LabelRule::Rewrite {
            pattern: compiled,
            replacement: replacement.into(),
        });
        Ok(self)
    }

    /// Finish the rule table
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::InvalidConfig`] if the page prefix is empty, since it
    /// would classify every bundle as a page.
    pub fn build(self) -> Result<Classifier, ComparisonError> {
        if self.page_prefix.is_empty() {
            return Err(ComparisonError::InvalidConfig {
                message: "page prefix cannot be empty".to_string(),
            });
        }
        Ok(Classifier {
            page_prefix: self.page_prefix,
            rules: self.rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bundle_label_is_url_path() {
        let classification = Classifier::default().classify("docs:/getting-started");

        assert_eq!(classification.category, Category::Page);
        assert_eq!(classification.label, "/getting-started");
        assert_eq!(classification.page_path(), Some("/getting-started"));
    }

    #[test]
    fn test_page_bundle_without_path_keeps_identifier() {
        let classification = Classifier::default().classify("docs:shared");

        assert_eq!(classification.category, Category::Page);
        assert_eq!(classification.label, "docs:shared");
        assert_eq!(classification.page_path(), None);
    }

    #[test]
    fn test_module_label_strips_namespace_and_suffix() {
        let classification = Classifier::default().classify("@lib/core/Button.esm");

        assert_eq!(classification.category, Category::Main);
        assert_eq!(classification.label, "Button");
        assert_eq!(classification.page_path(), None);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let classifier = Classifier::default();

        assert_eq!(
            classifier
                .classify("packages/lib/build/umd/lib.production.min.js")
                .label,
            "@lib/core[umd]"
        );
        assert_eq!(
            classifier.classify("@lib/core/Textarea").label,
            "TextareaAutosize"
        );
    }

    #[test]
    fn test_docs_entry_chunks_are_main_bundles() {
        let classifier = Classifier::default();

        let app = classifier.classify("docs.main");
        assert_eq!(app.category, Category::Main);
        assert_eq!(app.label, "docs:/_app");

        let landing = classifier.classify("docs.landing");
        assert_eq!(landing.category, Category::Main);
        assert_eq!(landing.label, "docs:/");
    }

    #[test]
    fn test_unmatched_identifier_is_its_own_label() {
        let classification = Classifier::default().classify("vendor-chunk");

        assert_eq!(classification.category, Category::Main);
        assert_eq!(classification.label, "vendor-chunk");
    }

    #[test]
    fn test_prefix_and_suffix_only_strip_at_edges() {
        let classifier = Classifier::default();

        assert_eq!(
            classifier.classify("@lib/core/styles/@lib/core/x.esm.js").label,
            "styles/@lib/core/x.esm.js"
        );
    }

    #[test]
    fn test_custom_rule_table() {
        let classifier = Classifier::builder("site:")
            .override_label("legacy", "Legacy bundle")
            .strip_prefix("@acme/ui/")
            .rewrite(r"\.min\.js$", "")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(classifier.classify("site:/about").label, "/about");
        assert_eq!(classifier.classify("docs:/about").category, Category::Main);
        assert_eq!(classifier.classify("legacy").label, "Legacy bundle");
        assert_eq!(classifier.classify("@acme/ui/Menu.min.js").label, "Menu");
    }

    #[test]
    fn test_rewrite_supports_capture_groups() {
        let classifier = Classifier::builder("docs:")
            .rewrite(r"^packages/([^/]+)/.*$", "$1")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            classifier.classify("packages/icons/build/index.js").label,
            "icons"
        );
    }

    #[test]
    fn test_invalid_rewrite_pattern_is_rejected() {
        let err = Classifier::builder("docs:")
            .rewrite("(unclosed", "")
            .unwrap_err();

        assert!(matches!(err, ComparisonError::InvalidRule { .. }));
    }

    #[test]
    fn test_empty_page_prefix_is_rejected() {
        let err = Classifier::builder("").build().unwrap_err();
        assert!(matches!(err, ComparisonError::InvalidConfig { .. }));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = Classifier::default();
        for id in ["docs:/a", "@lib/core/Chip.esm", "docs.main", "other"] {
            assert_eq!(classifier.classify(id), classifier.classify(id));
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Main.to_string(), "main");
        assert_eq!(Category::Page.to_string(), "page");
    }
}
