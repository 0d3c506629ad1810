//! Runbook link harvesting from the catalog page.

use runbooks_core::IndexEntry;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use super::normalize::inline_text;
use crate::fetch::slug_from_url;

/// Link text prefixes used by pagination controls.
const PAGINATION_PREFIXES: &[&str] = &["Prev", "Next"];

/// Placeholders rendered between page numbers.
const ELLIPSES: &[&str] = &["…", "..."];

/// Where runbook links live on the site.
#[derive(Debug, Clone)]
pub struct LinkScope {
    /// Scheme, host and port every href is resolved against.
    pub origin: Url,
    /// Path segment runbook URLs contain, e.g. `/posts/kubernetes/`.
    pub catalog_path: String,
}

impl LinkScope {
    pub fn new(origin: Url, catalog_path: impl Into<String>) -> Self {
        Self { origin, catalog_path: catalog_path.into() }
    }

    /// Whether `url` points below the catalog path rather than at the catalog itself.
    fn contains(&self, url: &Url) -> bool {
        let path = url.path();
        match path.find(&self.catalog_path) {
            Some(start) => !path[start + self.catalog_path.len()..].trim_matches('/').is_empty(),
            None => false,
        }
    }
}

/// Extract runbook links from the catalog page.
///
/// Links are kept in document order, resolved against the site origin, and
/// deduplicated by slug with the first occurrence winning.
pub fn extract_runbook_links(html: &str, scope: &LinkScope) -> Vec<IndexEntry> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").expect("invalid selector");

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Ok(resolved) = scope.origin.join(href) else {
            skipped += 1;
            continue;
        };

        if !scope.contains(&resolved) {
            continue;
        }

        let title = inline_text(element);
        if !is_runbook_title(&title) {
            skipped += 1;
            continue;
        }

        let Some(slug) = slug_from_url(&resolved) else {
            skipped += 1;
            continue;
        };

        if !seen.insert(slug.clone()) {
            tracing::trace!(%slug, "duplicate runbook slug ignored");
            continue;
        }

        entries.push(IndexEntry { title, url: resolved.to_string(), slug });
    }

    tracing::debug!(kept = entries.len(), skipped, "harvested runbook links");

    entries
}

/// Reject link text that belongs to navigation or pagination.
fn is_runbook_title(text: &str) -> bool {
    text.chars().count() > 3
        && !PAGINATION_PREFIXES.iter().any(|prefix| text.starts_with(prefix))
        && !text.starts_with(|c: char| c.is_ascii_digit())
        && !ELLIPSES.iter().any(|ellipsis| *ellipsis == text)
}
