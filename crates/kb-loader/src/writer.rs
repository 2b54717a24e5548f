//! Writing the knowledge base artifact.
//!
//! The previous artifact is deleted first. The new one is written to a
//! temporary sibling and renamed into place, so a reader sees either no file
//! or a complete one, never a truncated document.

use crate::error::{KbError, Result};
use crate::types::{KnowledgeBase, OutputFormat};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Delete `path` if it exists. A missing file is not an error.
pub async fn remove_output(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!("Removed previous knowledge base {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(KbError::RemoveOutput {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Render the knowledge base in the requested format, newline terminated.
pub fn render(kb: &KnowledgeBase, format: OutputFormat) -> Result<Vec<u8>> {
    let mut bytes = match format {
        OutputFormat::Compact => serde_json::to_vec(kb),
        OutputFormat::Pretty => serde_json::to_vec_pretty(kb),
    }
    .map_err(KbError::Serialize)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Serialize `kb` to `path`, replacing whatever is there. Returns the number
/// of bytes written.
pub async fn write_knowledge_base(path: &Path, kb: &KnowledgeBase, format: OutputFormat) -> Result<usize> {
    let bytes = render(kb, format)?;
    let write_err = |source| KbError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let tmp = temp_path(path);
    let result = async {
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&tmp, path).await
    }
    .await;

    if let Err(source) = result {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(write_err(source));
    }

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

/// Hidden sibling of `path` used while writing
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "kb-build.json".to_string());
    path.with_file_name(format!(".{}.tmp.{}", name, std::process::id()))
}
