//! MCP resource implementations.

pub mod field;
pub mod file;
pub mod registry;
pub mod stats;
pub mod templates;

pub use registry::ResourceRegistry;
