//! Builder crate for the knowledge base.
//!
//! This crate contains the orchestrator that sequences the loader stages
//! and the observer seam used to report progress.

pub mod orchestrator;
pub mod progress;

pub use orchestrator::{BuildSummary, KnowledgeBaseBuilder};
pub use progress::{BuildEvent, BuildObserver, TracingObserver};
