//! End-to-end tests for the Enricher

#[cfg(test)]
mod tests {
    use crate::{enrich_with_persistence, BatchRunner, EnrichError, Enricher};
    use scout_domain::{EnrichStatus, InstagramSource, LeadId, LeadRow};
    use scout_llm::MockProvider;
    use scout_store::{LeadFilter, MemoryStatusStore, SqliteStore};
    use std::time::Duration;
    use tokio::time::Instant;

    const FULL: &str = r#"{
        "official_website": "https://bluebottle.example",
        "website_source_url": "https://bluebottle.example",
        "instagram_url": "https://instagram.com/bluebottle",
        "instagram_source": "website_html",
        "decision_makers": [
            {"name": "James Freeman", "title": "Founder", "source_url": "https://bluebottle.example/about"},
            {"name": "Karen Lee", "title": "CEO", "source_url": "https://news.example/karen"}
        ]
    }"#;

    const SEARCH_ONLY: &str = r#"{
        "official_website": null,
        "website_source_url": null,
        "instagram_url": "https://instagram.com/joes",
        "instagram_source": "search",
        "decision_makers": []
    }"#;

    #[tokio::test(start_paused = true)]
    async fn test_full_enrichment_flow() {
        let provider = MockProvider::new(FULL);
        let enricher = Enricher::with_defaults(provider);
        let store = MemoryStatusStore::new();
        let row = LeadRow::new(1, "Blue Bottle Coffee", "Oakland", "CA");

        let result = enrich_with_persistence(&row, &enricher, &store).await.unwrap();

        assert_eq!(result.confidence, 100);
        assert_eq!(result.instagram_source, Some(InstagramSource::WebsiteHtml));
        assert_eq!(result.decision_makers.len(), 2);
        assert_eq!(
            result.search_queries.website,
            "Blue Bottle Coffee Oakland CA official website"
        );
        assert_eq!(store.statuses(), vec![EnrichStatus::Running, EnrichStatus::Done]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_derived_instagram_scores_zero() {
        let enricher = Enricher::with_defaults(MockProvider::new(SEARCH_ONLY));
        let row = LeadRow::new(2, "Joe's", "Brooklyn", "NY");

        let result = enricher.enrich(&row).await.unwrap();

        assert_eq!(result.instagram_url.as_deref(), Some("https://instagram.com/joes"));
        assert_eq!(result.instagram_source, Some(InstagramSource::Search));
        assert_eq!(result.confidence, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_against_sqlite_store() {
        let store = SqliteStore::new(":memory:").unwrap();
        let rows = vec![
            LeadRow::new(1, "Blue Bottle Coffee", "Oakland", "CA"),
            LeadRow::new("b-2", "Joe's", "Brooklyn", "NY"),
            LeadRow::new(3, "Closed Shop", "Nowhere", "KS"),
        ];
        for row in &rows {
            store.insert_lead(row).unwrap();
        }

        let provider = MockProvider::failing("no results")
            .then_payload(FULL)
            .then_payload(SEARCH_ONLY);
        let enricher = Enricher::with_defaults(provider);
        let start = Instant::now();

        let results = BatchRunner::new(&enricher, &store)
            .with_interval(Duration::from_secs(1))
            .run(&rows)
            .await;

        assert_eq!(start.elapsed(), Duration::from_millis(2_000 + 750));
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(!results[2].is_ok());

        let done = store.list_leads(&LeadFilter::with_status(EnrichStatus::Done)).unwrap();
        assert_eq!(done.len(), 2);

        let failed = store.get_status(&LeadId::Number(3)).unwrap().unwrap();
        assert_eq!(failed.status, EnrichStatus::Error);
        assert!(failed.error.unwrap().contains("Enrichment failed after 3 attempts"));
        assert!(failed.last_enriched_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_lead_in_sqlite_is_persistence_error() {
        let store = SqliteStore::new(":memory:").unwrap();
        let enricher = Enricher::with_defaults(MockProvider::new(FULL));
        let row = LeadRow::new(99, "Ghost", "Nowhere", "KS");

        let err = enrich_with_persistence(&row, &enricher, &store).await.unwrap_err();
        assert!(matches!(err, EnrichError::Persistence(_)));
    }
}
