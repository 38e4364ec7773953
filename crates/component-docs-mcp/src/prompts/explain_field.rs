//! Prompt `explain_field`: walk through a field's reference and local notes.

use serde_json::Value;

use crate::types::{
    McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult, PromptMessage,
    ToolContent,
};

pub fn definition() -> PromptDefinition {
    PromptDefinition {
        name: "explain_field".to_string(),
        description: Some("Guide for explaining how to use a form field".to_string()),
        arguments: Some(vec![PromptArgument {
            name: "field".to_string(),
            description: Some("Field identifier, e.g. text-input".to_string()),
            required: true,
        }]),
    }
}

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let field = args
        .get("field")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| McpError::InvalidParams("'field' argument is required".to_string()))?;

    let text = format!(
        "Explain how to use the '{field}' form field.\n\n\
         Please:\n\
         1. Call get_field_reference with field \"{field}\"\n\
         2. Summarize what the field is for using its description\n\
         3. Show the usage snippet and the most relevant examples\n\
         4. List the properties, marking the required ones\n\
         5. Call search_docs with \"{field}\" and mention any local notes that apply"
    );

    Ok(PromptGetResult {
        description: Some(format!("Explain the '{field}' form field")),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}
