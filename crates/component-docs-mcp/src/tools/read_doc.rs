//! Tool `read_doc`: contents of one local Markdown file.

use serde::Deserialize;
use serde_json::{json, Value};

use component_docs::DocsService;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct ReadParams {
    path: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "read_doc".to_string(),
        description: Some(
            "Read a local documentation file; the .md extension may be omitted".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "File path relative to the docs root"
                }
            },
            "required": ["path"]
        }),
    }
}

pub async fn execute(args: Value, service: &DocsService) -> McpResult<ToolCallResult> {
    let params: ReadParams = super::parse_args(args)?;
    let store = super::local_store(service)?;
    Ok(ToolCallResult::text(store.read_file(&params.path)?))
}
