//! Network-backed [`RunbookSource`] for the runbook site.

use async_trait::async_trait;
use runbooks_core::{AppConfig, Error, ExtractedRunbook, IndexEntry, RunbookSource};
use url::Url;

use crate::extract::{ExtractConfig, LinkScope, extract_runbook, extract_runbook_links};
use crate::fetch::{FetchClient, FetchConfig, canonicalize, site_origin};

/// Scrapes the catalog and runbook pages over HTTP.
///
/// Transport failures never reach the caller: they are logged and turned into
/// an empty index or a missing page.
pub struct RunbookScraper {
    client: FetchClient,
    index_url: Url,
    scope: LinkScope,
    extract: ExtractConfig,
}

impl RunbookScraper {
    /// Build a scraper from the application configuration.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let index_url =
            canonicalize(&config.index_url).map_err(|e| Error::InvalidInput(format!("index_url: {}", e)))?;
        let origin = site_origin(&index_url).map_err(|e| Error::InvalidInput(format!("index_url: {}", e)))?;

        Ok(Self {
            client: FetchClient::new(FetchConfig::from(config))?,
            index_url,
            scope: LinkScope::new(origin, config.catalog_path.clone()),
            extract: ExtractConfig::from(config),
        })
    }
}

#[async_trait]
impl RunbookSource for RunbookScraper {
    async fn resolve_index(&self) -> Vec<IndexEntry> {
        match self.client.fetch(self.index_url.as_str()).await {
            Ok(response) => {
                let entries = extract_runbook_links(&response.text(), &self.scope);
                tracing::info!(url = %self.index_url, runbooks = entries.len(), "resolved runbook index");
                entries
            }
            Err(e) => {
                tracing::warn!(url = %self.index_url, error = %e, "failed to fetch runbook index");
                Vec::new()
            }
        }
    }

    async fn extract_content(&self, url: &str) -> Option<ExtractedRunbook> {
        let response = match self.client.fetch(url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to fetch runbook content");
                return None;
            }
        };

        let runbook = extract_runbook(&response.text(), url, &self.extract);
        tracing::debug!(url, title = %runbook.title, chars = runbook.content.len(), fetch_ms = response.fetch_ms, "extracted runbook");
        Some(runbook)
    }
}
