//! Benchmarks for loading and assembling a knowledge base
//!
//! Run with: cargo bench --package kb-loader
//!
//! A synthetic recommendations directory is generated once in a temp dir.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kb_loader::{FeatureCatalog, KnowledgeBase, list_recommendation_files, load_recommendations};
use serde_json::json;

const RECORDS: usize = 500;

fn create_recommendations(dir: &std::path::Path) {
    for i in 0..RECORDS {
        let record = json!({
            "title": format!("Recommendation {i}"),
            "score": i,
            "tags": ["perf", "bench"],
        });
        std::fs::write(dir.join(format!("{i:05}.json")), record.to_string()).unwrap();
    }
}

fn bench_load_recommendations(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    create_recommendations(dir.path());
    let runtime = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("load_recommendations", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let files = list_recommendation_files(dir.path()).await.unwrap();
                black_box(load_recommendations(&files).await.unwrap())
            })
        })
    });
}

fn bench_assemble(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    create_recommendations(dir.path());
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (files, documents) = runtime.block_on(async {
        let files = list_recommendation_files(dir.path()).await.unwrap();
        let documents = load_recommendations(&files).await.unwrap();
        (files, documents)
    });

    c.bench_function("assemble_knowledge_base", |b| {
        b.iter(|| {
            let kb = KnowledgeBase::assemble(
                black_box(&files),
                documents.clone(),
                FeatureCatalog(json!({})),
            )
            .unwrap();
            black_box(kb)
        })
    });
}

criterion_group!(benches, bench_load_recommendations, bench_assemble);
criterion_main!(benches);
