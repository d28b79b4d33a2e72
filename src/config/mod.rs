//! Project configuration for size comparisons
//!
//! This module provides:
//! - .size-comparison.toml config file support
//! - Classification rules, preview host and artifact endpoints
//! - Conversion of the file into a [`crate::report::ReportContext`]

pub mod file;
pub mod loader;

pub use file::{
    ClassifierSettings, ConfigFile, LabelOverride, LabelRewrite, PreviewSettings,
    CONFIG_FILE_NAME,
};
pub use loader::ConfigLoader;
