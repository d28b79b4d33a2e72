//! Error types with contextual suggestions
//!
//! Every failure carries:
//! - an actionable message
//! - a suggested fix where one exists
//! - an exit code following sysexits.h so CI scripts can tell failures apart
//!
//! # Examples
//!
//! ```no_run
//! use size_comparison::snapshot::{SnapshotLoader, SnapshotRole};
//! use std::path::Path;
//!
//! let loader = SnapshotLoader::new();
//!
//! match loader.load(Path::new("size-snapshot.json"), SnapshotRole::Target) {
//!     Ok(snapshot) => println!("Loaded {} bundles", snapshot.len()),
//!     Err(e) => {
//!         eprintln!("{}", e);
//!         if let Some(help) = e.suggestion() {
//!             eprintln!("{}", help);
//!         }
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::snapshot::{SnapshotError, SnapshotRole};

/// Errors raised while loading inputs or configuring a comparison
#[derive(Error, Debug)]
pub enum ComparisonError {
    /// A snapshot file does not exist
    #[error("{role} snapshot not found: {}", .path.display())]
    SnapshotNotFound {
        /// Path that was read
        path: PathBuf,
        /// Which side of the comparison is missing
        role: SnapshotRole,
        /// Pull request being compared, if known
        pull_request: Option<u64>,
    },

    /// A snapshot file is not a valid size snapshot
    #[error("malformed snapshot: {}", .path.display())]
    MalformedSnapshot {
        /// Path that was read
        path: PathBuf,
        #[source]
        /// Parse failure
        source: SnapshotError,
    },

    /// Configuration values are inconsistent
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong
        message: String,
    },

    /// A label rewrite pattern does not compile
    #[error("invalid label rule pattern: '{pattern}'")]
    InvalidRule {
        /// The rejected pattern
        pattern: String,
        #[source]
        /// Compilation failure
        source: regex::Error,
    },

    /// An artifact URL passed on the command line does not parse
    #[error("invalid artifact URL: '{url}'")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        #[source]
        /// Parse failure
        source: url::ParseError,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl ComparisonError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::error::ComparisonError;
    /// use size_comparison::snapshot::SnapshotRole;
    /// use std::path::PathBuf;
    ///
    /// let error = ComparisonError::SnapshotNotFound {
    ///     path: PathBuf::from("size-snapshot.json"),
    ///     role: SnapshotRole::Target,
    ///     pull_request: Some(123),
    /// };
    ///
    /// let suggestion = error.suggestion().unwrap();
    /// assert!(suggestion.contains("Could not load comparison for #123"));
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::SnapshotNotFound {
                role: SnapshotRole::Target,
                pull_request: Some(pull_request),
                ..
            } => Some(format!(
                "Could not load comparison for #{}. This can happen if the CI build didn't finish yet.",
                pull_request
            )),
            Self::SnapshotNotFound {
                role: SnapshotRole::Target,
                ..
            } => Some(
                "The CI build may not have finished yet. Retry once it has uploaded its snapshot"
                    .to_string(),
            ),
            Self::SnapshotNotFound {
                role: SnapshotRole::Baseline,
                ..
            } => Some(
                "Run 'size-comparison locate' to find the baseline snapshot for the merge base"
                    .to_string(),
            ),
            Self::MalformedSnapshot { .. } => Some(
                "Snapshots must be a JSON object mapping bundle ids to { \"parsed\": <bytes>, \"gzip\": <bytes> }"
                    .to_string(),
            ),
            Self::InvalidConfig { .. } => Some(format!(
                "Check {} in the project root",
                crate::config::CONFIG_FILE_NAME
            )),
            Self::InvalidRule { .. } => {
                Some("Rewrite patterns use regex crate syntax; escape literal dots as '\\.'".to_string())
            }
            Self::InvalidUrl { .. } => Some(
                "Pass the absolute download URL listed by the build artifacts API".to_string(),
            ),
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::InvalidRule { .. } => Some("https://docs.rs/regex/latest/regex/#syntax"),
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Returns Unix-style exit codes based on the error type, following sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use size_comparison::error::ComparisonError;
    ///
    /// let error = ComparisonError::InvalidConfig {
    ///     message: "preview url-template must contain {pr}".to_string(),
    /// };
    ///
    /// assert_eq!(error.exit_code(), 78); // EX_CONFIG
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SnapshotNotFound { .. } => 66, // EX_NOINPUT (sysexits.h)
            Self::MalformedSnapshot { .. } => 65, // EX_DATAERR
            Self::InvalidConfig { .. } => 78,    // EX_CONFIG
            Self::InvalidRule { .. } => 78,      // EX_CONFIG
            Self::InvalidUrl { .. } => 64,       // EX_USAGE
            Self::Io { .. } => 74,               // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(comparison_error) = Self::find(error) {
            if let Some(suggestion) = comparison_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = comparison_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        Self::find(error).map_or(1, ComparisonError::exit_code)
    }

    // Commands wrap errors in context, so look through the whole chain.
    fn find(error: &anyhow::Error) -> Option<&ComparisonError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<ComparisonError>())
    }
}
