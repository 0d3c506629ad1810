//! In-memory, process-lifetime runbook cache.
//!
//! Two tiers, both filled lazily:
//!
//! - the index (title, url, slug for every runbook), loaded the first time any
//!   operation needs it
//! - page content, loaded per runbook on its first read
//!
//! Nothing is ever evicted or refreshed.

pub mod search;
pub mod source;
pub mod store;

pub use source::RunbookSource;
pub use store::RunbookCache;
