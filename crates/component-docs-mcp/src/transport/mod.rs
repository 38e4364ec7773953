//! Transports carrying JSON-RPC messages to the protocol handler.

pub mod framing;
#[cfg(feature = "http")]
pub mod http;
pub mod stdio;

#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use stdio::StdioTransport;
