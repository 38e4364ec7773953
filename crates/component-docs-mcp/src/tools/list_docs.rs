//! Tool `list_docs`: immediate children of a local docs directory.

use serde::Deserialize;
use serde_json::{json, Value};

use component_docs::DocsService;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    path: Option<String>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "list_docs".to_string(),
        description: Some("List files and directories in the local documentation tree".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Directory relative to the docs root (default: root)"
                }
            }
        }),
    }
}

pub async fn execute(args: Value, service: &DocsService) -> McpResult<ToolCallResult> {
    let params: ListParams = super::parse_args(args)?;
    let store = super::local_store(service)?;
    let path = params.path.unwrap_or_default();
    let entries = store.list_entries(&path)?;

    Ok(ToolCallResult::json(&json!({
        "path": path,
        "count": entries.len(),
        "entries": entries,
    })))
}
