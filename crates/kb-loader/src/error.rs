//! Error types for the kb-loader crate.
//!
//! Every stage of a knowledge base build maps onto one variant here, and
//! every variant carries the path it was working on so the operator can
//! tell which file broke the build.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inputs or writing the knowledge base
///
/// There is no recoverable variant: the build is all-or-nothing, so callers
/// are expected to propagate any of these straight to the top.
#[derive(Error, Debug)]
pub enum KbError {
    /// The recommendations directory is missing or unreadable
    #[error("Failed to read recommendations directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A recommendation or catalog file could not be read
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but its contents are not valid JSON
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The previous knowledge base could not be removed
    #[error("Failed to remove previous output {path}: {source}")]
    RemoveOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The new knowledge base could not be written
    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assembled document could not be serialized
    #[error("Failed to serialize knowledge base: {0}")]
    Serialize(#[source] serde_json::Error),

    /// File list and loaded documents disagree in length
    #[error("Expected {expected} documents but loaded {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Two files mapped to the same identifier
    #[error("Duplicate recommendation id {id:?} from {first} and {second}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A read task panicked or was cancelled before producing a result
    #[error("Read task for {path} did not complete: {source}")]
    Task {
        path: PathBuf,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, KbError>;
