//! Ordered title and content strategies for runbook pages.
//!
//! The site renders runbooks through several templates, so no single selector
//! reliably finds the body. Each strategy maps a parsed page to optional text;
//! the extractor tries them in order and keeps the first one that yields
//! enough text.

use scraper::{ElementRef, Html, Selector};

use super::normalize::{BODY_FALLBACK, CHROME, SkipList, inline_text, normalize_text, visible_text};

/// Title candidates, most specific first.
pub const TITLE_SELECTORS: &[&str] = &["h1", ".post-title", ".entry-title", "title"];

/// A container to pull runbook text from.
#[derive(Debug, Clone, Copy)]
pub struct ContentStrategy {
    pub name: &'static str,
    pub selector: &'static str,
}

/// Content containers, tried in this order.
pub const CONTENT_STRATEGIES: &[ContentStrategy] = &[
    ContentStrategy { name: "main", selector: "main" },
    ContentStrategy { name: "article", selector: "article" },
    ContentStrategy { name: "post-content", selector: ".post-content" },
    ContentStrategy { name: "entry-content", selector: ".entry-content" },
    ContentStrategy { name: "content", selector: ".content" },
    ContentStrategy { name: "post", selector: ".post" },
    ContentStrategy { name: "body", selector: "body" },
];

impl ContentStrategy {
    /// Normalized text of the first element matching this strategy, chrome removed.
    pub fn extract(&self, doc: &Html) -> Option<String> {
        first_match(doc, self.selector).map(|el| container_text(el, &CHROME))
    }
}

/// Text of the first title candidate present on the page.
///
/// Empty when no candidate exists or the first one found has no text.
pub fn extract_title(doc: &Html) -> String {
    TITLE_SELECTORS
        .iter()
        .find_map(|selector| first_match(doc, selector))
        .map(inline_text)
        .unwrap_or_default()
}

/// Whole page body without chrome, scripts or styles.
pub fn body_fallback(doc: &Html) -> String {
    first_match(doc, "body").map(|el| container_text(el, &BODY_FALLBACK)).unwrap_or_default()
}

/// Run the content strategies in order.
///
/// The first strategy whose text is longer than `min_chars` characters wins.
/// Otherwise the last matching strategy's text is kept when it reaches
/// `min_chars`. Failing that, the body fallback is returned whatever its length.
pub fn extract_content(doc: &Html, min_chars: usize) -> String {
    let mut last = None;

    for strategy in CONTENT_STRATEGIES {
        let Some(text) = strategy.extract(doc) else {
            continue;
        };

        let chars = text.chars().count();
        if chars > min_chars {
            tracing::debug!(strategy = strategy.name, chars, "content strategy matched");
            return text;
        }
        tracing::trace!(strategy = strategy.name, chars, "content strategy below threshold");
        last = Some(text);
    }

    match last {
        Some(text) if text.chars().count() >= min_chars => text,
        _ => {
            tracing::debug!("no content strategy matched, using body fallback");
            body_fallback(doc)
        }
    }
}

fn first_match<'a>(doc: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector).next()
}

fn container_text(element: ElementRef<'_>, skip: &SkipList) -> String {
    normalize_text(&visible_text(element, skip))
}
