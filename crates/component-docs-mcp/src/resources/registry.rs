//! Resource registration and dispatch.

use component_docs::DocsService;

use crate::types::{
    McpError, McpResult, ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition,
};

use super::templates::{FIELD_PREFIX, FILE_PREFIX, STATS_URI};
use super::{field, file, stats, templates};

pub struct ResourceRegistry;

impl ResourceRegistry {
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        templates::list_templates()
    }

    pub fn list_resources() -> Vec<ResourceDefinition> {
        templates::list_resources()
    }

    pub async fn read(uri: &str, service: &DocsService) -> McpResult<ReadResourceResult> {
        if uri == STATS_URI {
            stats::read_stats(service)
        } else if let Some(path) = uri.strip_prefix(FILE_PREFIX) {
            if path.is_empty() {
                return Err(McpError::InvalidParams(
                    "File URI must be docs://file/{path}".to_string(),
                ));
            }
            file::read_file(path, service)
        } else if let Some(subject) = uri.strip_prefix(FIELD_PREFIX) {
            field::read_field(subject, service).await
        } else {
            Err(McpError::ResourceNotFound(uri.to_string()))
        }
    }
}
