//! Tool `search_docs`: case-insensitive substring search over local Markdown.

use serde::Deserialize;
use serde_json::{json, Value};

use component_docs::DocsService;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "search_docs".to_string(),
        description: Some(
            "Search every Markdown file under the docs root for a phrase and return matching paths"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": { "type": "string", "description": "Text to look for" }
            },
            "required": ["query"]
        }),
    }
}

pub async fn execute(args: Value, service: &DocsService) -> McpResult<ToolCallResult> {
    let params: SearchParams = super::parse_args(args)?;
    let store = super::local_store(service)?;
    let matches = store.search_content(&params.query)?;

    Ok(ToolCallResult::json(&json!({
        "query": params.query,
        "total": matches.len(),
        "matches": matches,
    })))
}
