//! Runbook data model.
//!
//! A [`RunbookEntry`] starts life as an [`IndexEntry`] (title, url, slug) and is
//! upgraded in place with an [`ExtractedRunbook`] the first time it is read.

use chrono::{DateTime, Utc};

/// Title used when a page yields no usable heading.
pub const UNTITLED: &str = "Untitled Runbook";

/// Marker appended to truncated descriptions.
pub const TRUNCATION_MARKER: &str = "...";

/// A runbook link discovered on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    pub url: String,
    pub slug: String,
}

/// Text extracted from a single runbook page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRunbook {
    pub title: String,
    pub content: String,
    pub url: String,
    pub description: String,
}

/// One troubleshooting document held by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunbookEntry {
    /// Last non-empty path segment of `url`.
    pub slug: String,
    pub title: String,
    /// Never changes after insertion.
    pub url: String,
    /// `None` until the page has been fetched.
    pub content: Option<String>,
    pub description: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl From<IndexEntry> for RunbookEntry {
    fn from(entry: IndexEntry) -> Self {
        Self {
            slug: entry.slug,
            title: non_empty_title(entry.title),
            url: entry.url,
            content: None,
            description: None,
            fetched_at: None,
        }
    }
}

impl RunbookEntry {
    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }

    /// Merge freshly extracted fields into this entry.
    ///
    /// The entry keeps its original `url`; the extracted one is ignored.
    pub fn merge(&mut self, extracted: ExtractedRunbook) {
        self.title = non_empty_title(extracted.title);
        self.content = Some(extracted.content);
        self.description = Some(extracted.description);
        self.fetched_at = Some(Utc::now());
    }

    /// Render the entry as the text handed back to clients.
    ///
    /// ```text
    /// # <title>
    ///
    /// <content>
    ///
    /// Source: <url>
    /// ```
    pub fn render(&self) -> String {
        format!(
            "# {}\n\n{}\n\nSource: {}",
            self.title,
            self.content.as_deref().unwrap_or_default(),
            self.url
        )
    }
}

/// First `max_chars` characters of `content`, with [`TRUNCATION_MARKER`]
/// appended when anything was cut.
pub fn describe(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &content[..cut], TRUNCATION_MARKER),
        None => content.to_string(),
    }
}

fn non_empty_title(title: String) -> String {
    if title.trim().is_empty() { UNTITLED.to_string() } else { title }
}
