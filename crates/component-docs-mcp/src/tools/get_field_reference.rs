//! Tool `get_field_reference`: structured reference for one form field.

use serde::Deserialize;
use serde_json::{json, Value};

use component_docs::DocsService;

use crate::types::{McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
struct FieldParams {
    field: String,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "get_field_reference".to_string(),
        description: Some(
            "Fetch a form field's documentation page and return its description, usage, \
             properties and code examples. Results are cached for the server lifetime."
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "field": {
                    "type": "string",
                    "description": "Field identifier, e.g. text-input, select, toggle"
                }
            },
            "required": ["field"]
        }),
    }
}

pub async fn execute(args: Value, service: &DocsService) -> McpResult<ToolCallResult> {
    let params: FieldParams = super::parse_args(args)?;
    let record = service.field_reference(&params.field).await?;
    Ok(ToolCallResult::json(&*record))
}
