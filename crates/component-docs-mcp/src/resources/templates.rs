//! Static resources and URI templates.

use crate::types::{ResourceDefinition, ResourceTemplateDefinition};

pub const STATS_URI: &str = "docs://stats";
pub const FILE_PREFIX: &str = "docs://file/";
pub const FIELD_PREFIX: &str = "docs://field/";

pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
    vec![
        ResourceTemplateDefinition {
            uri_template: format!("{FILE_PREFIX}{{path}}"),
            name: "Local Document".to_string(),
            description: Some("A Markdown file from the local documentation tree".to_string()),
            mime_type: Some("text/markdown".to_string()),
        },
        ResourceTemplateDefinition {
            uri_template: format!("{FIELD_PREFIX}{{subject}}"),
            name: "Field Reference".to_string(),
            description: Some("Extracted reference for a form field".to_string()),
            mime_type: Some("application/json".to_string()),
        },
    ]
}

pub fn list_resources() -> Vec<ResourceDefinition> {
    vec![ResourceDefinition {
        uri: STATS_URI.to_string(),
        name: "Docs Statistics".to_string(),
        description: Some("Cache sizes, base URL and docs directory".to_string()),
        mime_type: Some("application/json".to_string()),
    }]
}
