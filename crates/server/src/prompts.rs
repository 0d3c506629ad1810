//! Troubleshooting prompt templates.

use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};
use runbooks_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Arguments for the troubleshoot-k8s prompt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TroubleshootArgs {
    /// Describe the symptoms or error messages you're seeing.
    pub symptoms: String,

    /// Additional context about your Kubernetes setup.
    #[serde(default)]
    pub context: Option<String>,
}

/// Arguments for the runbook-summary prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SummaryArgs {
    /// Comma-separated list of topics to summarize.
    #[serde(default)]
    pub topics: Option<String>,
}

/// Build the troubleshoot-k8s prompt.
pub fn troubleshoot(args: &TroubleshootArgs) -> Result<GetPromptResult, Error> {
    if args.symptoms.trim().is_empty() {
        return Err(Error::InvalidInput("Symptoms are required for troubleshooting".into()));
    }

    let context = match args.context.as_deref() {
        Some(context) if !context.is_empty() => format!("\nAdditional context: {}", context),
        _ => String::new(),
    };

    let text = format!(
        "I'm experiencing the following Kubernetes issue:\n\nSymptoms: {}{}\n\n\
         Please help me troubleshoot this issue using the available Kubernetes runbooks. \
         Provide step-by-step guidance and relevant commands.",
        args.symptoms, context
    );

    Ok(GetPromptResult {
        description: Some("Kubernetes troubleshooting guidance".into()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    })
}

/// Build the runbook-summary prompt.
pub fn summary(args: &SummaryArgs) -> GetPromptResult {
    let scope = match args.topics.as_deref() {
        Some(topics) if !topics.is_empty() => format!(" for topics: {}", topics),
        _ => String::new(),
    };

    let text = format!(
        "Please provide a summary of the key troubleshooting steps and solutions from the Kubernetes runbooks{}. \
         Focus on the most common issues and their solutions.",
        scope
    );

    GetPromptResult {
        description: Some("Summarize Kubernetes runbooks".into()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}
