//! Build configuration: where inputs live and where the artifact goes.

use crate::types::OutputFormat;
use std::path::{Path, PathBuf};

/// Directory (relative to the project root) holding one file per recommendation
pub const RECOMMENDATIONS_DIR: &str = "recommendations";

/// Feature catalog file, relative to the project root
pub const FEATURES_FILE: &str = "features.json";

/// Knowledge base artifact, relative to the project root
pub const OUTPUT_FILE: &str = "kb-build.json";

/// Paths and output format for one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub recommendations_dir: PathBuf,
    pub features_path: PathBuf,
    pub output_path: PathBuf,
    pub format: OutputFormat,
}

impl BuildConfig {
    /// The fixed project layout rooted at `root`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            recommendations_dir: root.join(RECOMMENDATIONS_DIR),
            features_path: root.join(FEATURES_FILE),
            output_path: root.join(OUTPUT_FILE),
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}
