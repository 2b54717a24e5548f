//! # Knowledge Base Loader
//!
//! Reads the two inputs of a knowledge base build and writes the result:
//!
//! - **enumerate**: list the per-recommendation `.json` files
//! - **loader**: read the feature catalog and every recommendation document
//! - **assemble**: key each document by the identifier of the file it came from
//! - **writer**: replace the previous `kb-build.json` with the new one
//! - **config**: the fixed project layout and output format
//! - **error**: error types shared by every stage
//!
//! ## Example Usage
//!
//! ```ignore
//! use kb_loader::{BuildConfig, KnowledgeBase};
//!
//! let config = BuildConfig::from_root(".");
//! let files = kb_loader::list_recommendation_files(&config.recommendations_dir).await?;
//! let features = kb_loader::load_feature_catalog(&config.features_path).await?;
//! let documents = kb_loader::load_recommendations(&files).await?;
//!
//! let kb = KnowledgeBase::assemble(&files, documents, features)?;
//! kb_loader::remove_output(&config.output_path).await?;
//! kb_loader::write_knowledge_base(&config.output_path, &kb, config.format).await?;
//! ```
//!
//! Record and feature contents are never validated; whatever parses as JSON
//! is carried into the output as-is.

pub mod assemble;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod loader;
pub mod types;
pub mod writer;

// Re-export commonly used items for convenience
pub use config::BuildConfig;
pub use enumerate::list_recommendation_files;
pub use error::{KbError, Result};
pub use loader::{load_documents_with, load_feature_catalog, load_recommendations, read_document};
pub use types::{
    Document, FeatureCatalog, KnowledgeBase, OutputFormat, RecommendationFile, RecordId,
    RECOMMENDATION_EXTENSION,
};
pub use writer::{remove_output, render, write_knowledge_base};
