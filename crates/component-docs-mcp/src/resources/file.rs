//! Resource: docs://file/{path}

use component_docs::DocsService;

use crate::types::{McpError, McpResult, ReadResourceResult, ResourceContent};

use super::templates::FILE_PREFIX;

pub fn read_file(path: &str, service: &DocsService) -> McpResult<ReadResourceResult> {
    let store = service
        .store()
        .ok_or_else(|| McpError::ResourceNotFound(format!("{FILE_PREFIX}{path}")))?;
    let text = store.read_file(path)?;

    Ok(ReadResourceResult {
        contents: vec![ResourceContent::markdown(format!("{FILE_PREFIX}{path}"), text)],
    })
}
