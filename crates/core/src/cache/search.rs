//! Title and slug lookups over the cached index.

use super::source::RunbookSource;
use super::store::RunbookCache;
use crate::runbook::RunbookEntry;

/// Title and slug of one runbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub title: String,
    pub slug: String,
}

impl<S: RunbookSource> RunbookCache<S> {
    /// Runbooks whose title or slug contains `query`, ignoring case.
    ///
    /// Content is never searched since most entries have not been fetched.
    pub async fn search(&self, query: &str) -> Vec<RunbookEntry> {
        let mut entries = self.entries.lock().await;
        self.ensure_index(&mut entries).await;

        let needle = query.to_lowercase();
        entries
            .values()
            .filter(|e| e.title.to_lowercase().contains(&needle) || e.slug.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Every runbook's title and slug in catalog order.
    pub async fn topics(&self) -> Vec<Topic> {
        let mut entries = self.entries.lock().await;
        self.ensure_index(&mut entries).await;

        entries
            .values()
            .map(|e| Topic { title: e.title.clone(), slug: e.slug.clone() })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::store::tests::FakeSource;

    fn cache() -> RunbookCache<FakeSource> {
        RunbookCache::new(FakeSource::with_index(&[
            ("crashloopbackoff", "Pod CrashLoopBackOff"),
            ("pod-pending", "Stuck Scheduling"),
            ("service-no-endpoints", "Service Has No Endpoints"),
        ]))
    }

    #[tokio::test]
    async fn test_search_case_insensitive_title_and_slug() {
        let cache = cache();
        let found = cache.search("pod").await;

        let slugs: Vec<_> = found.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["crashloopbackoff", "pod-pending"]);
    }

    #[tokio::test]
    async fn test_search_uppercase_query() {
        let cache = cache();
        let found = cache.search("ENDPOINTS").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "service-no-endpoints");
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let cache = cache();
        assert!(cache.search("ingress").await.is_empty());
    }

    #[tokio::test]
    async fn test_search_ignores_content() {
        let source = FakeSource::with_index(&[("a-one", "Alpha One")]).with_page("a-one", "mentions ingress");
        let cache = RunbookCache::new(source);
        cache.read("a-one").await.unwrap();

        assert!(cache.search("ingress").await.is_empty());
    }

    #[tokio::test]
    async fn test_topics_in_catalog_order() {
        let cache = cache();
        let topics = cache.topics().await;

        assert_eq!(topics.len(), 3);
        assert_eq!(topics[0], Topic { title: "Pod CrashLoopBackOff".into(), slug: "crashloopbackoff".into() });
        assert_eq!(topics[2].slug, "service-no-endpoints");
        assert_eq!(cache.source().index_calls(), 1);
    }

    #[tokio::test]
    async fn test_topics_empty_index_retries() {
        let cache = RunbookCache::new(FakeSource::default());
        assert!(cache.topics().await.is_empty());
        assert!(cache.topics().await.is_empty());
        assert_eq!(cache.source().index_calls(), 2);
    }
}
