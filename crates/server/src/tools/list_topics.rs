//! list-topics tool implementation.

use rmcp::{ErrorData as McpError, model::*};
use runbooks_core::{RunbookCache, RunbookSource};

use super::bullet;

/// Implementation of the list-topics tool.
pub async fn list_topics_impl<S: RunbookSource>(cache: &RunbookCache<S>) -> Result<CallToolResult, McpError> {
    let topics = cache.topics().await;

    let text = if topics.is_empty() {
        "No runbook topics found".to_string()
    } else {
        let lines: Vec<String> = topics.iter().map(|t| bullet(&t.title, &t.slug)).collect();
        format!("Available Kubernetes runbook topics ({} total):\n\n{}", lines.len(), lines.join("\n"))
    };

    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cache, empty_cache, text};

    #[tokio::test]
    async fn test_list_topics() {
        let cache = cache();
        let result = list_topics_impl(&cache).await.unwrap();

        assert_eq!(
            text(&result),
            "Available Kubernetes runbook topics (3 total):\n\n\
             - **Pod CrashLoopBackOff** (slug: crashloopbackoff)\n\
             - **Stuck Scheduling** (slug: pod-pending)\n\
             - **Broken Runbook** (slug: broken)"
        );
    }

    #[tokio::test]
    async fn test_list_topics_empty() {
        let cache = empty_cache();
        let result = list_topics_impl(&cache).await.unwrap();

        assert_eq!(text(&result), "No runbook topics found");
    }
}
