//! HTTP transport: `POST /mcp` for JSON-RPC, `GET /health` for probes.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware,
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::protocol::ProtocolHandler;
use crate::types::{error_codes, mcp_error_codes, JsonRpcMessage, McpError, McpResult};

pub struct ServerState {
    pub token: Option<String>,
    pub handler: ProtocolHandler,
}

pub struct HttpTransport {
    state: Arc<ServerState>,
}

impl HttpTransport {
    pub fn new(handler: ProtocolHandler, token: Option<String>) -> Self {
        Self {
            state: Arc::new(ServerState { token, handler }),
        }
    }

    /// Router with auth applied to `/mcp` only.
    pub fn router(&self) -> Router {
        let state = self.state.clone();
        Router::new()
            .route("/mcp", post(handle_request))
            .layer(middleware::from_fn_with_state(state.clone(), auth_layer))
            .route("/health", get(handle_health))
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
            .with_state(state)
    }

    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| McpError::Transport(e.to_string()))
    }
}

fn rpc_error(status: StatusCode, code: i32, message: &str) -> Response {
    (
        status,
        AxumJson(json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": { "code": code, "message": message }
        })),
    )
        .into_response()
}

async fn auth_layer(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    request: axum::extract::Request,
    next: middleware::Next,
) -> Response {
    if let Some(expected) = &state.token {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .is_some_and(|token| token == expected);

        if !authorized {
            return rpc_error(
                StatusCode::UNAUTHORIZED,
                mcp_error_codes::UNAUTHORIZED,
                "Unauthorized",
            );
        }
    }

    next.run(request).await
}

async fn handle_request(State(state): State<Arc<ServerState>>, body: String) -> Response {
    let msg: JsonRpcMessage = match serde_json::from_str(&body) {
        Ok(msg) => msg,
        Err(e) => {
            tracing::warn!("Parse error: {e}");
            return rpc_error(
                StatusCode::BAD_REQUEST,
                error_codes::PARSE_ERROR,
                &format!("Parse error: {e}"),
            );
        }
    };

    match state.handler.handle_message(msg).await {
        Some(response) => AxumJson(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn handle_health(State(state): State<Arc<ServerState>>) -> AxumJson<Value> {
    AxumJson(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "cached_fields": state.handler.service().cache().len(),
    }))
}
