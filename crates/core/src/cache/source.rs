//! Seam between the cache and whatever retrieves runbooks.

use async_trait::async_trait;

use crate::runbook::{ExtractedRunbook, IndexEntry};

/// Retrieves the runbook catalog and individual pages.
///
/// Implementations swallow transport and parse failures: the index degrades to
/// an empty list and a page to `None`.
#[async_trait]
pub trait RunbookSource: Send + Sync {
    /// Fetch the catalog and return its runbook links, deduplicated by slug.
    async fn resolve_index(&self) -> Vec<IndexEntry>;

    /// Fetch one runbook page and extract its text.
    async fn extract_content(&self, url: &str) -> Option<ExtractedRunbook>;
}
