//! Progress reporting for knowledge base builds.
//!
//! The orchestrator never prints directly. It hands a [`BuildEvent`] to a
//! [`BuildObserver`] at each stage, and the caller decides how to render it.

use std::path::PathBuf;
use tracing::{error, info};

/// A stage transition during a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    ListedRecommendations { count: usize },
    LoadedFeatures { count: usize },
    LoadedRecommendations { count: usize },
    Assembling,
    RemovingPrevious { path: PathBuf },
    Written { path: PathBuf, bytes: usize },
    Failed { stage: &'static str, message: String },
}

/// Receives build events as they happen.
///
/// `Send + Sync` so one observer can be shared across the concurrent stages.
pub trait BuildObserver: Send + Sync {
    fn on_event(&self, event: &BuildEvent);
}

/// Default observer: forwards every event to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BuildObserver for TracingObserver {
    fn on_event(&self, event: &BuildEvent) {
        match event {
            BuildEvent::ListedRecommendations { count } => {
                info!("Found {} recommendation files...", count)
            }
            BuildEvent::LoadedFeatures { count } => info!("Found {} feature entries...", count),
            BuildEvent::LoadedRecommendations { count } => {
                info!("Successfully loaded {} recommendations...", count)
            }
            BuildEvent::Assembling => info!("Constructing recommendations object..."),
            BuildEvent::RemovingPrevious { path } => {
                info!("Removing old knowledge base {}...", path.display())
            }
            BuildEvent::Written { path, bytes } => {
                info!("Successfully built knowledge base {} ({} bytes)", path.display(), bytes)
            }
            BuildEvent::Failed { stage, message } => error!("Error {}: {}", stage, message),
        }
    }
}
