//! In-memory runbook source for handler tests.

use async_trait::async_trait;
use runbooks_core::runbook::describe;
use runbooks_core::{ExtractedRunbook, IndexEntry, RunbookCache, RunbookSource};
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) struct StaticSource {
    index: Vec<IndexEntry>,
    pub page_calls: AtomicUsize,
}

#[async_trait]
impl RunbookSource for StaticSource {
    async fn resolve_index(&self) -> Vec<IndexEntry> {
        self.index.clone()
    }

    async fn extract_content(&self, url: &str) -> Option<ExtractedRunbook> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        if url.ends_with("/broken/") {
            return None;
        }
        let content = format!("Steps for {url}");
        Some(ExtractedRunbook {
            title: "Fetched Title".into(),
            description: describe(&content, 200),
            content,
            url: url.to_string(),
        })
    }
}

/// Cache over three runbooks; the `broken` one fails to fetch.
pub(crate) fn cache() -> RunbookCache<StaticSource> {
    let index = [
        ("crashloopbackoff", "Pod CrashLoopBackOff"),
        ("pod-pending", "Stuck Scheduling"),
        ("broken", "Broken Runbook"),
    ]
    .iter()
    .map(|(slug, title)| IndexEntry {
        title: title.to_string(),
        url: format!("https://example.com/runbooks/posts/kubernetes/{slug}/"),
        slug: slug.to_string(),
    })
    .collect();

    RunbookCache::new(StaticSource { index, page_calls: AtomicUsize::new(0) })
}

/// An empty catalog.
pub(crate) fn empty_cache() -> RunbookCache<StaticSource> {
    RunbookCache::new(StaticSource { index: Vec::new(), page_calls: AtomicUsize::new(0) })
}

/// Text of the first content block of a tool result.
pub(crate) fn text(result: &rmcp::model::CallToolResult) -> String {
    result.content[0].as_text().map(|t| t.text.clone()).unwrap_or_default()
}
