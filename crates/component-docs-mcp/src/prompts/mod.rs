//! MCP prompt implementations.

pub mod explain_field;
pub mod registry;

pub use registry::PromptRegistry;
