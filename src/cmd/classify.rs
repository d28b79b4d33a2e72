//! Classify command implementation
//!
//! Shows how the configured rules categorize and label bundle identifiers, which
//! helps when tuning `.size-comparison.toml`.

use anyhow::{Context, Result};
use std::path::Path;

use crate::classify::Classifier;
use crate::config::ConfigLoader;

/// One line of output per identifier: category, label, identifier
pub fn describe(classifier: &Classifier, ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            let classification = classifier.classify(id);
            format!("{}\t{}\t{}", classification.category, classification.label, id)
        })
        .collect()
}

/// Print the category and label of each identifier
pub fn cmd_classify(project_root: &Path, ids: &[String]) -> Result<()> {
    let config = ConfigLoader::load(project_root)?;
    let classifier = config
        .classifier
        .to_classifier()
        .context("Failed to build classification rules")?;

    for line in describe(&classifier, ids) {
        println!("{}", line);
    }

    Ok(())
}
