//! Resource: docs://field/{subject}

use component_docs::DocsService;

use crate::types::{McpResult, ReadResourceResult, ResourceContent};

use super::templates::FIELD_PREFIX;

pub async fn read_field(subject: &str, service: &DocsService) -> McpResult<ReadResourceResult> {
    let record = service.field_reference(subject).await?;
    Ok(ReadResourceResult {
        contents: vec![ResourceContent::json(
            format!("{FIELD_PREFIX}{subject}"),
            &*record,
        )],
    })
}
