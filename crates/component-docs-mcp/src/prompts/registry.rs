//! Prompt registration and dispatch.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptGetResult, PromptDefinition};

use super::explain_field;

pub struct PromptRegistry;

impl PromptRegistry {
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![explain_field::definition()]
    }

    pub fn get(name: &str, arguments: Option<Value>) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "explain_field" => explain_field::expand(args),
            _ => Err(McpError::PromptNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explain_field_requires_field() {
        assert!(PromptRegistry::get("explain_field", None).is_err());
        let result =
            PromptRegistry::get("explain_field", Some(json!({ "field": "toggle" }))).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].role, "user");
    }

    #[test]
    fn test_unknown_prompt() {
        assert!(matches!(
            PromptRegistry::get("observe", None),
            Err(McpError::PromptNotFound(_))
        ));
    }
}
