//! Visible-text collection and whitespace normalization.

use regex::Regex;
use scraper::ElementRef;
use scraper::node::{Element, Node};
use std::sync::LazyLock;

static BLANK_LINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n+").expect("invalid regex"));
static HORIZONTAL_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("invalid regex"));

/// Elements whose subtrees are left out of extracted text.
#[derive(Debug, Clone, Copy)]
pub struct SkipList {
    pub tags: &'static [&'static str],
    pub classes: &'static [&'static str],
}

/// Navigation chrome dropped from every content container.
pub const CHROME: SkipList = SkipList { tags: &["nav", "header", "footer"], classes: &["nav", "navigation"] };

/// Chrome plus non-text elements, used when falling back to the whole body.
pub const BODY_FALLBACK: SkipList = SkipList {
    tags: &["nav", "header", "footer", "script", "style", "noscript"],
    classes: &["nav", "navigation"],
};

impl SkipList {
    fn matches(&self, element: &Element) -> bool {
        self.tags.iter().any(|tag| *tag == element.name())
            || element.classes().any(|class| self.classes.iter().any(|skipped| *skipped == class))
    }
}

/// Text nodes under `element`, each trimmed, one per line.
///
/// Skipped subtrees are ignored without touching the parsed document.
pub fn visible_text(element: ElementRef<'_>, skip: &SkipList) -> String {
    let mut lines = Vec::new();
    collect_text(element, skip, &mut lines);
    lines.join("\n")
}

fn collect_text(element: ElementRef<'_>, skip: &SkipList, lines: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
            Node::Element(el) if !skip.matches(el) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(child_ref, skip, lines);
                }
            }
            _ => {}
        }
    }
}

/// Text of `element` on a single line with whitespace collapsed.
pub fn inline_text(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

/// Collapse 3+ line breaks into one blank line and runs of spaces/tabs into one space.
pub fn normalize_text(text: &str) -> String {
    let text = BLANK_LINE_RUNS.replace_all(text, "\n\n");
    HORIZONTAL_RUNS.replace_all(&text, " ").trim().to_string()
}
