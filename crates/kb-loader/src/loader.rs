//! Reading JSON documents from disk.
//!
//! The feature catalog is a single file. Recommendations are many files read
//! concurrently: every read is spawned up front and the join handles are then
//! awaited in submission order, which keeps result `i` paired with file `i`
//! no matter which read finishes first.

use crate::error::{KbError, Result};
use crate::types::{Document, FeatureCatalog, RecommendationFile};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read one file and parse it as an opaque JSON document.
pub async fn read_document(path: PathBuf) -> Result<Document> {
    let bytes = tokio::fs::read(&path).await.map_err(|source| KbError::ReadFile {
        path: path.clone(),
        source,
    })?;
    // A leading byte order mark is tolerated
    let json = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    serde_json::from_slice(json).map_err(|source| KbError::Parse { path, source })
}

/// Load the feature catalog. Its contents are not inspected.
pub async fn load_feature_catalog(path: &Path) -> Result<FeatureCatalog> {
    let catalog = FeatureCatalog(read_document(path.to_path_buf()).await?);
    debug!("Read feature catalog {} ({} entries)", path.display(), catalog.len());
    Ok(catalog)
}

/// Load every recommendation file, in the order given.
pub async fn load_recommendations(files: &[RecommendationFile]) -> Result<Vec<Document>> {
    load_documents_with(files, read_document).await
}

/// Load `files` concurrently with a custom reader.
///
/// The returned vector has the same length and order as `files`. If any read
/// fails the whole load fails with the first error in submission order, and
/// no partial results are returned.
pub async fn load_documents_with<F, Fut>(files: &[RecommendationFile], read: F) -> Result<Vec<Document>>
where
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = Result<Document>> + Send + 'static,
{
    let handles: Vec<_> = files
        .iter()
        .map(|file| (file.path.clone(), tokio::spawn(read(file.path.clone()))))
        .collect();

    let mut documents = Vec::with_capacity(handles.len());
    for (path, handle) in handles {
        let document = handle
            .await
            .map_err(|source| KbError::Task { path, source })??;
        documents.push(document);
    }

    Ok(documents)
}
