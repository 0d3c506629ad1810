//! Unified error types for the runbooks server.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the runbooks server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid tool or prompt parameters (e.g., empty topic).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Malformed `runbook://` resource URI.
    #[error("INVALID_URI: {0}")]
    InvalidUri(String),

    /// No runbook with this slug exists after loading the index.
    #[error("NOT_FOUND: Runbook not found: {0}")]
    NotFound(String),

    /// The runbook page could not be fetched or yielded nothing.
    #[error("FETCH_FAILED: Failed to fetch runbook content: {0}")]
    FetchFailed(String),

    /// Fetch timeout or client construction failure.
    #[error("FETCH_TIMEOUT: {0}")]
    FetchTimeout(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) | Error::InvalidUri(_) => -32602,
            Error::FetchFailed(_) => -32000,
            Error::NotFound(_) => -32002,
            Error::FetchTimeout(_) => -32006,
            Error::HttpError(_) => -32008,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("pod-pending".to_string());
        assert!(err.to_string().contains("NOT_FOUND"));
        assert!(err.to_string().contains("pod-pending"));
    }

    #[test]
    fn test_error_to_mcp_error() {
        let mcp_err: McpError = Error::NotFound("x".to_string()).into();
        assert_eq!(mcp_err.code.0, -32002);

        let mcp_err: McpError = Error::InvalidUri("http://kubernetes/x".to_string()).into();
        assert_eq!(mcp_err.code.0, -32602);
        assert!(mcp_err.message.contains("INVALID_URI"));
    }
}
