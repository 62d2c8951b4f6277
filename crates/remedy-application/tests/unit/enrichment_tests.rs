//! Tests for diagnostic enrichment

use crate::test_utils::{diagnostic, key};
use remedy_application::DiagnosticEnrichment;
use remedy_domain::{DiagnosticSnapshot, Error};
use remedy_providers::{InMemoryResourceFetcher, MokaResourceCache};
use std::sync::Arc;

fn setup() -> (Arc<InMemoryResourceFetcher>, DiagnosticEnrichment) {
    let fetcher = Arc::new(InMemoryResourceFetcher::new());
    fetcher.insert_file(key("a.go"), "c1", "package a\n");
    fetcher.insert_file(key("b.go"), "c1", "package b\n");
    let enrichment = DiagnosticEnrichment::new(Arc::new(MokaResourceCache::new(fetcher.clone())));
    (fetcher, enrichment)
}

#[tokio::test]
async fn test_resolves_each_resource_once_and_keeps_order() {
    let (fetcher, enrichment) = setup();
    let snapshot = DiagnosticSnapshot::new(vec![
        (key("b.go"), vec![diagnostic("b.go", 1, "first")]),
        (
            key("a.go"),
            vec![diagnostic("a.go", 1, "second"), diagnostic("a.go", 2, "third")],
        ),
    ]);

    let enriched = enrichment.enrich(&snapshot).await.expect("enriched");

    let messages: Vec<_> = enriched.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(fetcher.fetch_count(), 2);
    assert_eq!(enriched[1].entry().path, "a.go");
    assert!(Arc::ptr_eq(enriched[1].entry(), enriched[2].entry()));
}

#[tokio::test]
async fn test_failed_resolution_fails_the_snapshot() {
    let (_fetcher, enrichment) = setup();
    let snapshot = DiagnosticSnapshot::new(vec![
        (key("a.go"), vec![diagnostic("a.go", 1, "ok")]),
        (key("gone.go"), vec![diagnostic("gone.go", 1, "missing")]),
    ]);

    match enrichment.enrich(&snapshot).await {
        Err(Error::ResourceNotFound { resource }) => assert!(resource.contains("gone.go")),
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_snapshot_fetches_nothing() {
    let (fetcher, enrichment) = setup();
    let enriched = enrichment
        .enrich(&DiagnosticSnapshot::default())
        .await
        .expect("enriched");
    assert!(enriched.is_empty());
    assert_eq!(fetcher.fetch_count(), 0);
}
