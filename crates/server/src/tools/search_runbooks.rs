//! search-runbooks tool implementation.
//!
//! Case-insensitive match on runbook titles and slugs.

use rmcp::{ErrorData as McpError, model::*};
use runbooks_core::{RunbookCache, RunbookSource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::bullet;

/// Input parameters for search-runbooks tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchRunbooksParams {
    /// Search query for finding relevant runbooks.
    pub query: String,
}

/// Implementation of the search-runbooks tool.
pub async fn search_impl<S: RunbookSource>(
    cache: &RunbookCache<S>, params: SearchRunbooksParams,
) -> Result<CallToolResult, McpError> {
    let query = params.query.to_lowercase();
    let matches = cache.search(&query).await;

    let text = if matches.is_empty() {
        format!("No runbooks found matching '{}'", query)
    } else {
        let lines: Vec<String> = matches.iter().map(|e| bullet(&e.title, &e.slug)).collect();
        format!("Found {} runbooks matching '{}':\n\n{}", lines.len(), query, lines.join("\n"))
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cache, text};

    #[tokio::test]
    async fn test_search_matches_title_and_slug() {
        let cache = cache();
        let result = search_impl(&cache, SearchRunbooksParams { query: "POD".into() }).await.unwrap();

        assert_eq!(
            text(&result),
            "Found 2 runbooks matching 'pod':\n\n- **Pod CrashLoopBackOff** (slug: crashloopbackoff)\n- **Stuck Scheduling** (slug: pod-pending)"
        );
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let cache = cache();
        let result = search_impl(&cache, SearchRunbooksParams { query: "ingress".into() }).await.unwrap();

        assert_eq!(text(&result), "No runbooks found matching 'ingress'");
    }
}
