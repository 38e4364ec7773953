//! Server error type and its JSON-RPC error codes.

use component_docs::DocsError;
use serde_json::json;

use super::message::{JsonRpcError, JsonRpcErrorObject, RequestId, JSONRPC_VERSION};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// MCP and application error codes.
pub mod mcp_error_codes {
    pub const RESOURCE_NOT_FOUND: i32 = -32802;
    pub const TOOL_NOT_FOUND: i32 = -32803;
    pub const PROMPT_NOT_FOUND: i32 = -32804;
    /// Remote page or local document does not exist.
    pub const DOC_NOT_FOUND: i32 = -32850;
    /// Remote page could not be retrieved.
    pub const FETCH_FAILED: i32 = -32851;

    /// HTTP transport: missing or invalid bearer token.
    pub const UNAUTHORIZED: i32 = -32900;
}

#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Prompt not found: {0}")]
    PromptNotFound(String),

    #[error("Not found: {0}")]
    DocNotFound(String),

    #[error("{message}")]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unauthorized")]
    Unauthorized,
}

impl McpError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        use mcp_error_codes::*;
        match self {
            McpError::ParseError(_) | McpError::Json(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::InternalError(_) | McpError::Transport(_) | McpError::Io(_) => {
                INTERNAL_ERROR
            }
            McpError::ResourceNotFound(_) => RESOURCE_NOT_FOUND,
            McpError::ToolNotFound(_) => TOOL_NOT_FOUND,
            McpError::PromptNotFound(_) => PROMPT_NOT_FOUND,
            McpError::DocNotFound(_) => DOC_NOT_FOUND,
            McpError::FetchFailed { .. } => FETCH_FAILED,
            McpError::Unauthorized => UNAUTHORIZED,
        }
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        let data = match self {
            McpError::FetchFailed {
                status: Some(status),
                ..
            } => Some(json!({ "status": status })),
            _ => None,
        };

        JsonRpcError {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorObject {
                code: self.code(),
                message: self.to_string(),
                data,
            },
        }
    }
}

impl From<DocsError> for McpError {
    fn from(e: DocsError) -> Self {
        let message = e.to_string();
        match e {
            DocsError::InvalidArgument(msg) => McpError::InvalidParams(msg),
            DocsError::NotFound(what) => McpError::DocNotFound(what),
            DocsError::FetchFailed { status, .. } => McpError::FetchFailed { status, message },
            DocsError::Io(io) => McpError::Io(io),
        }
    }
}

pub type McpResult<T> = Result<T, McpError>;
