//! Discovery of recommendation files.
//!
//! The directory is listed exactly once. The resulting list is the single
//! source of truth for both identifier derivation and document loading, so
//! it must never be re-read between those steps.

use crate::error::{KbError, Result};
use crate::types::RecommendationFile;
use std::path::Path;
use tracing::debug;

/// List every `.json` file in `dir`, sorted by file name.
///
/// Directories are skipped even if their name ends in `.json`. Any failure
/// while listing aborts the whole enumeration; a partial list is never
/// returned.
pub async fn list_recommendation_files(dir: &Path) -> Result<Vec<RecommendationFile>> {
    let read_dir_err = |source| KbError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_dir_err)?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await.map_err(read_dir_err)? {
        let file_name = entry.file_name();
        let Some(file) = RecommendationFile::from_file_name(dir, &file_name) else {
            continue;
        };
        if entry.file_type().await.map_err(read_dir_err)?.is_dir() {
            debug!("Skipping directory {}", file.path.display());
            continue;
        }
        files.push(file);
    }

    // Listing order is platform dependent
    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));

    debug!("Enumerated {} recommendation files in {}", files.len(), dir.display());
    Ok(files)
}
