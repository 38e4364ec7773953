//! Component docs MCP server: local Markdown docs and live field references
//! for LLM assistants.

pub mod config;
pub mod logging;
pub mod prompts;
pub mod protocol;
pub mod repl;
pub mod resources;
pub mod tools;
pub mod transport;
pub mod types;

pub use config::{ConfigArgs, ServerConfig};
pub use logging::LogConfig;
pub use protocol::ProtocolHandler;
pub use transport::StdioTransport;

use std::sync::Arc;

use component_docs::{DocStore, DocsService};

/// Build the shared service from resolved configuration.
///
/// A configured docs directory that does not exist is an error; with no
/// directory at all the local tools report `InvalidParams` on use.
pub fn build_service(config: &ServerConfig) -> component_docs::DocsResult<Arc<DocsService>> {
    let store = config
        .docs_dir
        .as_ref()
        .map(|dir| DocStore::open(dir.clone()))
        .transpose()?;
    if store.is_none() {
        tracing::warn!("No local documentation directory; only get_field_reference is usable");
    }
    Ok(Arc::new(DocsService::with_http(
        store,
        &config.base_url,
        config.timeout_ms,
    )))
}
