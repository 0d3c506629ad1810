//! Client code for the runbooks server.
//!
//! This crate provides the HTTP fetch pipeline, the catalog link resolver,
//! page content extraction, and the [`RunbookScraper`] that ties them to the
//! core cache.

pub mod extract;
pub mod fetch;
pub mod source;

pub use extract::{ExtractConfig, LinkScope, extract_runbook, extract_runbook_links};
pub use fetch::{FetchClient, FetchConfig, FetchResponse};
pub use source::RunbookScraper;
