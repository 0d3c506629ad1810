//! fetch-runbook tool implementation.
//!
//! Reads a runbook by slug through the same path as `resources/read`.

use rmcp::{ErrorData as McpError, model::*};
use runbooks_core::{RunbookCache, RunbookSource};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::resources::read_by_uri;
use crate::uri::RunbookUri;

/// Input parameters for fetch-runbook tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FetchRunbookParams {
    /// The runbook topic/slug to fetch.
    pub topic: String,
}

/// Implementation of the fetch-runbook tool.
///
/// Lookup and fetch failures come back as an error result with readable text
/// rather than a protocol error.
pub async fn fetch_impl<S: RunbookSource>(
    cache: &RunbookCache<S>, params: FetchRunbookParams,
) -> Result<CallToolResult, McpError> {
    let uri = RunbookUri::format(&params.topic);

    match read_by_uri(cache, &uri).await {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            tracing::debug!(topic = %params.topic, error = %e, "fetch-runbook failed");
            Ok(CallToolResult::error(vec![Content::text(format!(
                "Error fetching runbook '{}': {}",
                params.topic, e
            ))]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cache, text};
    use std::sync::atomic::Ordering;

    fn params(topic: &str) -> FetchRunbookParams {
        FetchRunbookParams { topic: topic.into() }
    }

    #[tokio::test]
    async fn test_fetch_existing_runbook() {
        let cache = cache();
        let result = fetch_impl(&cache, params("crashloopbackoff")).await.unwrap();

        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(
            text(&result),
            "# Fetched Title\n\nSteps for https://example.com/runbooks/posts/kubernetes/crashloopbackoff/\n\nSource: https://example.com/runbooks/posts/kubernetes/crashloopbackoff/"
        );
    }

    #[tokio::test]
    async fn test_fetch_twice_fetches_once() {
        let cache = cache();
        let first = fetch_impl(&cache, params("pod-pending")).await.unwrap();
        let second = fetch_impl(&cache, params("pod-pending")).await.unwrap();

        assert_eq!(text(&first), text(&second));
        assert_eq!(cache.source().page_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_unknown_topic() {
        let cache = cache();
        let result = fetch_impl(&cache, params("nonexistent-slug")).await.unwrap();

        assert!(result.is_error.unwrap_or(false));
        let message = text(&result);
        assert!(message.starts_with("Error fetching runbook 'nonexistent-slug': "));
        assert!(message.contains("Runbook not found"));
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let cache = cache();
        let result = fetch_impl(&cache, params("broken")).await.unwrap();

        assert!(result.is_error.unwrap_or(false));
        assert!(text(&result).contains("Failed to fetch runbook content: broken"));
    }

    #[tokio::test]
    async fn test_fetch_empty_topic() {
        let cache = cache();
        let result = fetch_impl(&cache, params("")).await.unwrap();

        assert!(result.is_error.unwrap_or(false));
        assert!(text(&result).contains("INVALID_URI"));
        assert_eq!(cache.source().page_calls.load(Ordering::SeqCst), 0);
    }
}
