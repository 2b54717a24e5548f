//! # Knowledge Base Orchestrator
//!
//! Runs one build from start to finish:
//! 1. List recommendation files and load the feature catalog (concurrently)
//! 2. Load every recommendation document
//! 3. Key documents by file identifier
//! 4. Remove the previous knowledge base
//! 5. Write the new one
//!
//! Any failure stops the build at that stage. Nothing is retried and no
//! partial knowledge base is ever written.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use kb_loader::{BuildConfig, FeatureCatalog, KnowledgeBase, RecommendationFile};

use crate::progress::{BuildEvent, BuildObserver, TracingObserver};

/// What a successful build produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub recommendations: usize,
    pub features: usize,
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub elapsed: Duration,
}

/// Sequences the loader stages and reports progress to an observer
#[derive(Clone)]
pub struct KnowledgeBaseBuilder {
    config: BuildConfig,
    observer: Arc<dyn BuildObserver>,
}

impl KnowledgeBaseBuilder {
    /// Create a builder that logs progress through `tracing`
    pub fn new(config: BuildConfig) -> Self {
        Self::with_observer(config, Arc::new(TracingObserver))
    }

    pub fn with_observer(config: BuildConfig, observer: Arc<dyn BuildObserver>) -> Self {
        Self { config, observer }
    }

    /// Run the whole build.
    pub async fn build(&self) -> Result<BuildSummary> {
        let start_time = Instant::now();
        debug!("Starting knowledge base build with {:?}", self.config);

        // The two inputs are independent
        let (files, features) = tokio::join!(self.list_files(), self.load_features());
        let files = files?;
        let features = features?;

        let documents = self.load_recommendations(&files).await?;
        let kb = self.assemble(&files, documents, features)?;

        self.remove_previous().await?;
        let bytes_written = self.write(&kb).await?;

        let summary = BuildSummary {
            recommendations: kb.recommendation_count(),
            features: kb.features.len(),
            output_path: self.config.output_path.clone(),
            bytes_written,
            elapsed: start_time.elapsed(),
        };
        info!(
            "Knowledge base build finished in {:.2?}: {} recommendations, {} features",
            summary.elapsed, summary.recommendations, summary.features
        );
        Ok(summary)
    }

    async fn list_files(&self) -> Result<Vec<RecommendationFile>> {
        let dir = &self.config.recommendations_dir;
        let files = self.stage(
            "reading recommendation dir",
            kb_loader::list_recommendation_files(dir).await,
        )?;
        self.emit(BuildEvent::ListedRecommendations { count: files.len() });
        Ok(files)
    }

    async fn load_features(&self) -> Result<FeatureCatalog> {
        let path = &self.config.features_path;
        let features = self.stage(
            "loading features list",
            kb_loader::load_feature_catalog(path).await,
        )?;
        self.emit(BuildEvent::LoadedFeatures { count: features.len() });
        Ok(features)
    }

    async fn load_recommendations(&self, files: &[RecommendationFile]) -> Result<Vec<kb_loader::Document>> {
        let documents = self.stage(
            "loading recommendations",
            kb_loader::load_recommendations(files).await,
        )?;
        self.emit(BuildEvent::LoadedRecommendations { count: documents.len() });
        Ok(documents)
    }

    fn assemble(
        &self,
        files: &[RecommendationFile],
        documents: Vec<kb_loader::Document>,
        features: FeatureCatalog,
    ) -> Result<KnowledgeBase> {
        self.emit(BuildEvent::Assembling);
        self.stage(
            "constructing recommendations object",
            KnowledgeBase::assemble(files, documents, features),
        )
    }

    async fn remove_previous(&self) -> Result<()> {
        let path = &self.config.output_path;
        self.emit(BuildEvent::RemovingPrevious { path: path.clone() });
        self.stage("removing old knowledge base", kb_loader::remove_output(path).await)
    }

    async fn write(&self, kb: &KnowledgeBase) -> Result<usize> {
        let path = &self.config.output_path;
        let bytes = self.stage(
            "writing knowledge base",
            kb_loader::write_knowledge_base(path, kb, self.config.format).await,
        )?;
        self.emit(BuildEvent::Written { path: path.clone(), bytes });
        Ok(bytes)
    }

    /// Report a failed stage to the observer, then attach the stage as context
    fn stage<T>(&self, stage: &'static str, result: kb_loader::Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.emit(BuildEvent::Failed {
                stage,
                message: e.to_string(),
            });
        }
        result.with_context(|| format!("Error {stage}"))
    }

    fn emit(&self, event: BuildEvent) {
        self.observer.on_event(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    /// Observer that remembers every event it sees
    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<BuildEvent>>,
    }

    impl BuildObserver for RecordingObserver {
        fn on_event(&self, event: &BuildEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn create_project(root: &Path, records: &[(&str, &str)], features: &str) -> BuildConfig {
        let config = BuildConfig::from_root(root);
        std::fs::create_dir_all(&config.recommendations_dir).unwrap();
        for (name, contents) in records {
            std::fs::write(config.recommendations_dir.join(name), contents).unwrap();
        }
        std::fs::write(&config.features_path, features).unwrap();
        config
    }

    #[tokio::test]
    async fn test_events_follow_stage_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_project(dir.path(), &[("a1.json", r#"{"score":1}"#)], r#"{"f1":{}}"#);
        let observer = Arc::new(RecordingObserver::default());

        let builder = KnowledgeBaseBuilder::with_observer(config.clone(), observer.clone());
        let summary = builder.build().await.unwrap();

        let events = observer.events.lock().unwrap().clone();
        // listing and catalog loading run concurrently, so only check they both came first
        assert!(events[..2].contains(&BuildEvent::ListedRecommendations { count: 1 }));
        assert!(events[..2].contains(&BuildEvent::LoadedFeatures { count: 1 }));
        assert_eq!(
            events[2..].to_vec(),
            vec![
                BuildEvent::LoadedRecommendations { count: 1 },
                BuildEvent::Assembling,
                BuildEvent::RemovingPrevious {
                    path: config.output_path.clone()
                },
                BuildEvent::Written {
                    path: config.output_path.clone(),
                    bytes: summary.bytes_written
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_is_reported_with_stage() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_project(dir.path(), &[("a1.json", "{")], "{}");
        let observer = Arc::new(RecordingObserver::default());

        let err = KnowledgeBaseBuilder::with_observer(config, observer.clone())
            .build()
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Error loading recommendations");
        let events = observer.events.lock().unwrap();
        assert!(matches!(
            events.last(),
            Some(BuildEvent::Failed { stage: "loading recommendations", .. })
        ));
        assert!(!events.iter().any(|e| matches!(e, BuildEvent::RemovingPrevious { .. })));
    }

    #[tokio::test]
    async fn test_missing_recommendations_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig::from_root(dir.path());
        std::fs::write(&config.features_path, "{}").unwrap();

        let err = KnowledgeBaseBuilder::new(config).build().await.unwrap_err();
        assert_eq!(err.to_string(), "Error reading recommendation dir");
    }
}
