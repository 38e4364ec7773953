//! MCP tool implementations.

pub mod get_field_reference;
pub mod list_docs;
pub mod read_doc;
pub mod registry;
pub mod search_docs;

pub use registry::ToolRegistry;

use component_docs::{DocStore, DocsService};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::types::{McpError, McpResult};

/// Decode tool arguments, mapping shape errors to `InvalidParams`.
fn parse_args<T: DeserializeOwned>(args: Value) -> McpResult<T> {
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// The local store, or `InvalidParams` when the server runs without one.
fn local_store(service: &DocsService) -> McpResult<&DocStore> {
    service.store().ok_or_else(|| {
        McpError::InvalidParams(
            "no local documentation directory configured (set --docs-dir or COMPONENT_DOCS_DIR)"
                .to_string(),
        )
    })
}
