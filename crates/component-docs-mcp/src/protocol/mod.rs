//! JSON-RPC dispatch for the MCP surface.

pub mod handler;
pub mod negotiation;
pub mod validator;

pub use handler::ProtocolHandler;
