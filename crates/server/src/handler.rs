//! MCP server handler implementation.
//!
//! This module defines the main server handler that routes tool calls,
//! resource reads, and prompt requests to the runbook cache.
use std::sync::Arc;

use crate::prompts::{self, SummaryArgs, TroubleshootArgs};
use crate::resources;
use crate::tools::{FetchRunbookParams, SearchRunbooksParams, fetch_impl, list_topics_impl, search_impl};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        router::prompt::PromptRouter,
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, ListResourcesResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ReadResourceRequestParam, ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use runbooks_client::RunbookScraper;
use runbooks_core::RunbookCache;

/// Cache shared by every request for the lifetime of the process.
pub type SharedCache = Arc<RunbookCache<RunbookScraper>>;

/// The main MCP server handler for the runbooks server.
#[derive(Clone)]
pub struct RunbooksServer {
    cache: SharedCache,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl RunbooksServer {
    /// Create a new server handler over an already constructed cache.
    pub fn new(cache: SharedCache) -> Self {
        Self { cache, tool_router: Self::tool_router(), prompt_router: Self::prompt_router() }
    }

    #[tool(name = "fetch-runbook", description = "Fetch a specific Kubernetes runbook by topic")]
    async fn fetch_runbook(&self, params: Parameters<FetchRunbookParams>) -> Result<CallToolResult, McpError> {
        fetch_impl(&self.cache, params.0).await
    }

    #[tool(name = "search-runbooks", description = "Search through Kubernetes runbooks by keyword")]
    async fn search_runbooks(&self, params: Parameters<SearchRunbooksParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.cache, params.0).await
    }

    #[tool(name = "list-topics", description = "List all available Kubernetes runbook topics")]
    async fn list_topics(&self) -> Result<CallToolResult, McpError> {
        list_topics_impl(&self.cache).await
    }
}

#[prompt_router]
impl RunbooksServer {
    #[prompt(name = "troubleshoot-k8s", description = "Get troubleshooting guidance for Kubernetes issues")]
    async fn troubleshoot_k8s(&self, params: Parameters<TroubleshootArgs>) -> Result<GetPromptResult, McpError> {
        prompts::troubleshoot(&params.0).map_err(McpError::from)
    }

    #[prompt(name = "runbook-summary", description = "Summarize key points from Kubernetes runbooks")]
    async fn runbook_summary(&self, params: Parameters<SummaryArgs>) -> Result<GetPromptResult, McpError> {
        Ok(prompts::summary(&params.0))
    }
}

#[prompt_handler]
impl ServerHandler for RunbooksServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "kubernetes-runbooks-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            instructions: Some(
                "Kubernetes troubleshooting runbooks. Use list-topics or search-runbooks to find a slug, \
                 then fetch-runbook or read runbook://kubernetes/<slug>."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }

    async fn list_resources(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources = resources::list_impl(&self.cache).await;
        Ok(ListResourcesResult { meta: None, resources, next_cursor: None })
    }

    async fn read_resource(
        &self, request: ReadResourceRequestParam, _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        resources::read_impl(&self.cache, &request.uri).await
    }
}
