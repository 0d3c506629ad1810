//! Runbook extraction from raw HTML.
//!
//! ### Index pages
//! - Every `a[href]` is a candidate; pagination and navigation links are
//!   filtered by path and link text.
//! - Slugs come from the last non-empty path segment; first occurrence wins.
//!
//! ### Runbook pages
//! - Title and body are located by ordered, independently testable strategies
//!   (see [`strategies`]).
//! - A container only counts if its text clears a length threshold, so empty
//!   template wrappers fall through to the next candidate.

pub mod links;
pub mod normalize;
pub mod strategies;

pub use links::{LinkScope, extract_runbook_links};
pub use strategies::{CONTENT_STRATEGIES, ContentStrategy, extract_content, extract_title};

use runbooks_core::AppConfig;
use runbooks_core::runbook::{ExtractedRunbook, UNTITLED, describe};
use scraper::Html;

/// Configuration for content extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Characters a container must exceed to be accepted (default: 100)
    pub min_content_chars: usize,

    /// Length of the description excerpt (default: 200)
    pub description_chars: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { min_content_chars: 100, description_chars: 200 }
    }
}

impl From<&AppConfig> for ExtractConfig {
    fn from(config: &AppConfig) -> Self {
        Self { min_content_chars: config.min_content_chars, description_chars: config.description_chars }
    }
}

/// Extract title, body and description from a runbook page.
///
/// Never fails: a page without recognizable structure yields the default
/// title and whatever text its body holds.
pub fn extract_runbook(html: &str, url: &str, config: &ExtractConfig) -> ExtractedRunbook {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc);
    let title = if title.is_empty() { UNTITLED.to_string() } else { title };
    let content = extract_content(&doc, config.min_content_chars);
    let description = describe(&content, config.description_chars);

    ExtractedRunbook { title, content, url: url.to_string(), description }
}
