//! MCP tool implementations.
//!
//! This module contains all tools exposed by the runbooks server.

pub mod fetch_runbook;
pub mod list_topics;
pub mod search_runbooks;

pub use fetch_runbook::{FetchRunbookParams, fetch_impl};
pub use list_topics::list_topics_impl;
pub use search_runbooks::{SearchRunbooksParams, search_impl};

/// One bullet line per runbook.
fn bullet(title: &str, slug: &str) -> String {
    format!("- **{}** (slug: {})", title, slug)
}
