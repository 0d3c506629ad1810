//! Runbooks exposed as MCP resources.
//!
//! Every cached runbook is listed as `runbook://kubernetes/<slug>` with a
//! `text/plain` body. Listing only needs the index; reading fetches the page.

use rmcp::{
    ErrorData as McpError,
    model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents},
};
use runbooks_core::{Error, RunbookCache, RunbookSource};

use crate::uri::RunbookUri;

const MIME_TYPE: &str = "text/plain";

/// Resource descriptors for every known runbook.
pub async fn list_impl<S: RunbookSource>(cache: &RunbookCache<S>) -> Vec<Resource> {
    cache
        .list_entries()
        .await
        .into_iter()
        .map(|entry| {
            let mut resource =
                RawResource::new(RunbookUri::format(&entry.slug), format!("Kubernetes Runbook: {}", entry.title));
            resource.description = Some(format!("Kubernetes troubleshooting guide: {}", entry.title));
            resource.mime_type = Some(MIME_TYPE.to_string());
            resource.no_annotation()
        })
        .collect()
}

/// Validate `uri` and read the runbook it names.
///
/// The URI is checked before the cache is touched.
pub async fn read_by_uri<S: RunbookSource>(cache: &RunbookCache<S>, uri: &str) -> Result<String, Error> {
    let parsed = RunbookUri::parse(uri)?;
    cache.read(&parsed.slug).await
}

/// Implementation of `resources/read`.
pub async fn read_impl<S: RunbookSource>(cache: &RunbookCache<S>, uri: &str) -> Result<ReadResourceResult, McpError> {
    let text = read_by_uri(cache, uri).await?;
    Ok(ReadResourceResult { contents: vec![ResourceContents::text(text, uri)] })
}
