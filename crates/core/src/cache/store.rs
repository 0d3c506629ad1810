//! Slug-keyed runbook store with lazy index and content loading.

use indexmap::IndexMap;
use tokio::sync::Mutex;

use super::source::RunbookSource;
use crate::Error;
use crate::runbook::{IndexEntry, RunbookEntry};

/// Runbook cache handle.
///
/// Constructed once at startup and shared with the protocol layer. The mapping
/// sits behind an async mutex that stays held across the page fetch, so two
/// concurrent reads of the same slug cannot both upgrade it.
pub struct RunbookCache<S> {
    pub(crate) source: S,
    pub(crate) entries: Mutex<IndexMap<String, RunbookEntry>>,
}

impl<S: RunbookSource> RunbookCache<S> {
    /// Create an empty cache backed by `source`.
    pub fn new(source: S) -> Self {
        Self { source, entries: Mutex::new(IndexMap::new()) }
    }

    /// Get reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// All known runbooks in catalog order, loading the index if the cache is empty.
    pub async fn list_entries(&self) -> Vec<RunbookEntry> {
        let mut entries = self.entries.lock().await;
        self.ensure_index(&mut entries).await;
        entries.values().cloned().collect()
    }

    /// Full text of the runbook identified by `slug`.
    ///
    /// Loads the index when the cache is empty or does not know the slug yet,
    /// then fetches the page on first access. Later reads are served from memory.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the slug is still unknown after loading the index
    /// - `Error::FetchFailed` if the page could not be fetched
    pub async fn read(&self, slug: &str) -> Result<String, Error> {
        let mut entries = self.entries.lock().await;

        if !entries.contains_key(slug) {
            self.load_index(&mut entries).await;
        }

        let entry = entries.get_mut(slug).ok_or_else(|| Error::NotFound(slug.to_string()))?;

        if !entry.is_loaded() {
            let extracted = self
                .source
                .extract_content(&entry.url)
                .await
                .ok_or_else(|| Error::FetchFailed(slug.to_string()))?;

            entry.merge(extracted);
            tracing::debug!(slug, url = %entry.url, "runbook content cached");
        }

        Ok(entry.render())
    }

    pub(crate) async fn ensure_index(&self, entries: &mut IndexMap<String, RunbookEntry>) {
        if entries.is_empty() {
            self.load_index(entries).await;
        }
    }

    async fn load_index(&self, entries: &mut IndexMap<String, RunbookEntry>) {
        let index = self.source.resolve_index().await;
        let added = insert_index(entries, index);
        tracing::info!(added, total = entries.len(), "runbook index loaded");
    }
}

/// Insert index entries, keeping whatever is already cached for a slug.
///
/// Returns the number of new entries.
fn insert_index(entries: &mut IndexMap<String, RunbookEntry>, index: Vec<IndexEntry>) -> usize {
    let before = entries.len();
    for item in index {
        entries.entry(item.slug.clone()).or_insert_with(|| RunbookEntry::from(item));
    }
    entries.len() - before
}
