//! Resource: docs://stats

use serde_json::json;

use component_docs::DocsService;

use crate::types::{McpResult, ReadResourceResult, ResourceContent};

use super::templates::STATS_URI;

pub fn read_stats(service: &DocsService) -> McpResult<ReadResourceResult> {
    let store = service.store();
    let content = json!({
        "base_url": service.base_url(),
        "cached_fields": service.cache().len(),
        "cached_subjects": service.cache().subjects(),
        "docs_dir": store.map(|s| s.base_dir().display().to_string()),
        "cached_files": store.map(|s| s.cached_files()).unwrap_or(0),
    });

    Ok(ReadResourceResult {
        contents: vec![ResourceContent::json(STATS_URI.to_string(), &content)],
    })
}
