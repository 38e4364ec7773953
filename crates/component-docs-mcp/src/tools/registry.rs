//! Tool registration and dispatch.

use serde_json::Value;

use component_docs::DocsService;

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{get_field_reference, list_docs, read_doc, search_docs};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            get_field_reference::definition(),
            list_docs::definition(),
            read_doc::definition(),
            search_docs::definition(),
        ]
    }

    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        service: &DocsService,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "get_field_reference" => get_field_reference::execute(args, service).await,
            "list_docs" => list_docs::execute(args, service).await,
            "read_doc" => read_doc::execute(args, service).await,
            "search_docs" => search_docs::execute(args, service).await,
            _ => Err(McpError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> DocsService {
        DocsService::with_http(None, "http://127.0.0.1:9", 100)
    }

    #[test]
    fn test_every_tool_has_object_schema() {
        for tool in ToolRegistry::list_tools() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
            assert!(tool.description.is_some(), "{}", tool.name);
        }
    }

    #[test]
    fn test_unknown_tool() {
        let result = tokio_test::block_on(ToolRegistry::call("nope", None, &service()));
        assert!(matches!(result, Err(McpError::ToolNotFound(name)) if name == "nope"));
    }

    #[test]
    fn test_field_argument_must_be_a_string() {
        let result = tokio_test::block_on(ToolRegistry::call(
            "get_field_reference",
            Some(json!({ "field": 42 })),
            &service(),
        ));
        assert!(matches!(result, Err(McpError::InvalidParams(_))));
    }
}
