//! Request dispatcher: routes JSON-RPC messages to tools, resources, and prompts.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Mutex;

use component_docs::DocsService;

use crate::prompts::PromptRegistry;
use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::negotiation::NegotiatedCapabilities;
use super::validator::validate_request;

pub struct ProtocolHandler {
    service: Arc<DocsService>,
    capabilities: Arc<Mutex<NegotiatedCapabilities>>,
}

impl ProtocolHandler {
    pub fn new(service: Arc<DocsService>) -> Self {
        Self {
            service,
            capabilities: Arc::new(Mutex::new(NegotiatedCapabilities::default())),
        }
    }

    pub fn service(&self) -> &Arc<DocsService> {
        &self.service
    }

    /// Handle one decoded message. Notifications and stray responses yield `None`.
    pub async fn handle_message(&self, msg: JsonRpcMessage) -> Option<Value> {
        match msg {
            JsonRpcMessage::Request(req) => Some(self.handle_request(req).await),
            JsonRpcMessage::Notification(notif) => {
                self.handle_notification(notif).await;
                None
            }
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => {
                tracing::warn!("Ignoring response message from client");
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Value {
        if let Err(e) = validate_request(&request) {
            return error_value(&e, request.id);
        }

        let id = request.id.clone();
        match self.dispatch_request(&request).await {
            Ok(value) => serde_json::to_value(JsonRpcResponse::new(id, value)).unwrap_or_default(),
            Err(e) => {
                tracing::debug!(method = %request.method, id = %id, code = e.code(), "{e}");
                error_value(&e, id)
            }
        }
    }

    async fn dispatch_request(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let params = request.params.clone();
        match request.method.as_str() {
            "initialize" => self.handle_initialize(params).await,
            "shutdown" => {
                tracing::info!("Shutdown requested");
                Ok(empty_object())
            }
            "ping" => Ok(empty_object()),

            "tools/list" => to_value(ToolListResult {
                tools: ToolRegistry::list_tools(),
                next_cursor: None,
            }),
            "tools/call" => {
                let call: ToolCallParams = required_params(params, "Tool call")?;
                to_value(ToolRegistry::call(&call.name, call.arguments, &self.service).await?)
            }

            "resources/list" => to_value(ResourceListResult {
                resources: ResourceRegistry::list_resources(),
                next_cursor: None,
            }),
            "resources/templates/list" => to_value(ResourceTemplateListResult {
                resource_templates: ResourceRegistry::list_templates(),
                next_cursor: None,
            }),
            "resources/read" => {
                let read: ResourceReadParams = required_params(params, "Resource read")?;
                to_value(ResourceRegistry::read(&read.uri, &self.service).await?)
            }

            "prompts/list" => to_value(PromptListResult {
                prompts: PromptRegistry::list_prompts(),
                next_cursor: None,
            }),
            "prompts/get" => {
                let get: PromptGetParams = required_params(params, "Prompt get")?;
                to_value(PromptRegistry::get(&get.name, get.arguments)?)
            }

            _ => Err(McpError::MethodNotFound(request.method.clone())),
        }
    }

    async fn handle_notification(&self, notification: JsonRpcNotification) {
        match notification.method.as_str() {
            "initialized" | "notifications/initialized" => {
                self.capabilities.lock().await.mark_initialized();
            }
            "notifications/cancelled" => {
                let cancelled = notification
                    .params
                    .and_then(|p| serde_json::from_value::<CancelledParams>(p).ok());
                match cancelled {
                    Some(c) => tracing::info!(
                        request_id = %c.request_id,
                        reason = c.reason.as_deref().unwrap_or(""),
                        "Cancellation requested; requests run to completion"
                    ),
                    None => tracing::info!("Received cancellation notification"),
                }
            }
            other => tracing::debug!("Unknown notification: {other}"),
        }
    }

    async fn handle_initialize(&self, params: Option<Value>) -> McpResult<Value> {
        let init: InitializeParams = required_params(params, "Initialize")?;
        let result = self.capabilities.lock().await.negotiate(init);
        to_value(result)
    }
}

fn required_params<T: DeserializeOwned>(params: Option<Value>, what: &str) -> McpResult<T> {
    params
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError::InvalidParams(e.to_string()))?
        .ok_or_else(|| McpError::InvalidParams(format!("{what} params required")))
}

fn to_value(value: impl serde::Serialize) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::InternalError(e.to_string()))
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn error_value(error: &McpError, id: RequestId) -> Value {
    serde_json::to_value(error.to_json_rpc_error(id)).unwrap_or_default()
}
