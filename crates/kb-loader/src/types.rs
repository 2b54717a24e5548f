//! Core domain types for knowledge base builds.
//!
//! Recommendation records and feature metadata are opaque to this crate:
//! they are kept as `serde_json::Value` and passed through untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a recommendation: its file name without the `.json` suffix
pub type RecordId = String;

/// One opaque JSON document, never interpreted by the builder
pub type Document = serde_json::Value;

/// Extension that marks a file in the recommendations directory as a record
pub const RECOMMENDATION_EXTENSION: &str = ".json";

// =============================================================================
// Inputs
// =============================================================================

/// A recommendation file discovered by the enumerator.
///
/// `id` is derived from the file name once, at enumeration time, and the
/// same value is used later as the key in the output mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationFile {
    pub id: RecordId,
    pub path: PathBuf,
}

impl RecommendationFile {
    /// Build a record from a directory entry name, or `None` if the name
    /// does not carry the recommendation extension.
    pub fn from_file_name(dir: &std::path::Path, file_name: &std::ffi::OsStr) -> Option<Self> {
        let name = file_name.to_string_lossy();
        let id = name.strip_suffix(RECOMMENDATION_EXTENSION)?;
        Some(Self {
            id: id.to_string(),
            path: dir.join(file_name),
        })
    }
}

/// The feature catalog, passed through exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureCatalog(pub Document);

impl FeatureCatalog {
    /// Number of feature entries (zero when the catalog is not an object)
    pub fn len(&self) -> usize {
        self.0.as_object().map_or(0, |entries| entries.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Output
// =============================================================================

/// The knowledge base document written to disk.
///
/// Field order here is the field order in the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub recommendations: BTreeMap<RecordId, Document>,
    pub features: FeatureCatalog,
}

/// How the knowledge base is rendered on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Minified JSON followed by a newline
    #[default]
    Compact,
    /// Two-space indented JSON followed by a newline
    Pretty,
}
