//! Dispatcher behaviour end to end through `ProtocolHandler`.

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use component_docs::{DocStore, DocsService};
use component_docs_mcp::protocol::ProtocolHandler;
use component_docs_mcp::transport::StdioTransport;
use component_docs_mcp::types::*;

// ─────────────────────── helpers ───────────────────────

const TEXT_INPUT_PAGE: &str = "<html><body>\
    <h1>Text Input</h1><p>A basic input.</p>\
    <h2>Usage</h2><pre>TextInput::make('name')</pre>\
    </body></html>";

fn mcp_request(id: i64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

fn tool_call(id: i64, name: &str, arguments: Value) -> Value {
    mcp_request(id, "tools/call", json!({ "name": name, "arguments": arguments }))
}

fn docs_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("forms")).unwrap();
    std::fs::write(
        dir.path().join("forms/select.md"),
        "# Select\nUse ->searchable() for long lists.",
    )
    .unwrap();
    std::fs::write(dir.path().join("intro.md"), "# Intro\nWelcome.").unwrap();
    dir
}

fn handler(store: Option<DocStore>, base_url: &str) -> ProtocolHandler {
    ProtocolHandler::new(Arc::new(DocsService::with_http(store, base_url, 2_000)))
}

fn offline_handler(dir: Option<&tempfile::TempDir>) -> ProtocolHandler {
    let store = dir.map(|d| DocStore::open(d.path()).unwrap());
    handler(store, "http://127.0.0.1:9")
}

async fn send(handler: &ProtocolHandler, msg: Value) -> Option<Value> {
    let parsed: JsonRpcMessage = serde_json::from_value(msg).unwrap();
    handler.handle_message(parsed).await
}

async fn send_unwrap(handler: &ProtocolHandler, msg: Value) -> Value {
    send(handler, msg).await.expect("expected response")
}

fn error_code(response: &Value) -> i64 {
    response["error"]["code"]
        .as_i64()
        .unwrap_or_else(|| panic!("expected error, got {response}"))
}

fn tool_text(response: &Value) -> String {
    response["result"]["content"][0]["text"]
        .as_str()
        .unwrap_or_else(|| panic!("expected text content, got {response}"))
        .to_string()
}

// ─────────────────────── handshake ───────────────────────

#[tokio::test]
async fn test_initialize_and_ping() {
    let handler = offline_handler(None);
    let resp = send_unwrap(
        &handler,
        mcp_request(
            0,
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "test-client", "version": "1.0" }
            }),
        ),
    )
    .await;
    assert_eq!(resp["result"]["protocolVersion"], MCP_VERSION);
    assert_eq!(resp["result"]["serverInfo"]["name"], SERVER_NAME);

    let notif = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    assert!(send(&handler, notif).await.is_none());

    let pong = send_unwrap(&handler, mcp_request(1, "ping", json!({}))).await;
    assert_eq!(pong["result"], json!({}));
}

#[tokio::test]
async fn test_cancel_notification_gets_no_reply() {
    let handler = offline_handler(None);
    let cancel = json!({
        "jsonrpc": "2.0",
        "method": "notifications/cancelled",
        "params": { "requestId": 4, "reason": "user" }
    });
    assert!(send(&handler, cancel).await.is_none());
}

#[tokio::test]
async fn test_listings() {
    let handler = offline_handler(None);

    let tools = send_unwrap(&handler, mcp_request(1, "tools/list", json!({}))).await;
    let names: Vec<_> = tools["result"]["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["get_field_reference", "list_docs", "read_doc", "search_docs"]
    );

    let templates =
        send_unwrap(&handler, mcp_request(2, "resources/templates/list", json!({}))).await;
    assert_eq!(
        templates["result"]["resourceTemplates"][0]["uriTemplate"],
        "docs://file/{path}"
    );

    let prompts = send_unwrap(&handler, mcp_request(3, "prompts/list", json!({}))).await;
    assert_eq!(prompts["result"]["prompts"][0]["name"], "explain_field");
}

// ─────────────────────── error codes ───────────────────────

#[tokio::test]
async fn test_missing_field_argument_is_invalid_params() {
    let handler = offline_handler(None);
    let resp = send_unwrap(&handler, tool_call(5, "get_field_reference", json!({}))).await;
    assert_eq!(error_code(&resp), -32602);
    assert_eq!(resp["id"], 5);
}

#[tokio::test]
async fn test_blank_field_is_invalid_params() {
    let handler = offline_handler(None);
    let resp = send_unwrap(
        &handler,
        tool_call(6, "get_field_reference", json!({ "field": "  " })),
    )
    .await;
    assert_eq!(error_code(&resp), -32602);
}

#[tokio::test]
async fn test_unknown_tool_and_method() {
    let handler = offline_handler(None);

    let resp = send_unwrap(&handler, tool_call(7, "delete_docs", json!({}))).await;
    assert_eq!(error_code(&resp), -32803);

    let resp = send_unwrap(&handler, mcp_request(8, "docs/teleport", json!({}))).await;
    assert_eq!(error_code(&resp), -32601);
}

#[tokio::test]
async fn test_wrong_jsonrpc_version_is_invalid_request() {
    let handler = offline_handler(None);
    let resp = send_unwrap(
        &handler,
        json!({ "jsonrpc": "1.0", "id": 9, "method": "ping" }),
    )
    .await;
    assert_eq!(error_code(&resp), -32600);
}

#[tokio::test]
async fn test_unknown_prompt_and_resource() {
    let handler = offline_handler(None);

    let resp = send_unwrap(
        &handler,
        mcp_request(10, "prompts/get", json!({ "name": "summarize" })),
    )
    .await;
    assert_eq!(error_code(&resp), -32804);

    let resp = send_unwrap(
        &handler,
        mcp_request(11, "resources/read", json!({ "uri": "docs://nowhere" })),
    )
    .await;
    assert_eq!(error_code(&resp), -32802);
}

#[tokio::test]
async fn test_local_tools_without_docs_dir() {
    let handler = offline_handler(None);
    for (name, args) in [
        ("list_docs", json!({})),
        ("read_doc", json!({ "path": "intro" })),
        ("search_docs", json!({ "query": "select" })),
    ] {
        let resp = send_unwrap(&handler, tool_call(12, name, args)).await;
        assert_eq!(error_code(&resp), -32602, "tool {name}");
    }
}

// ─────────────────────── field references ───────────────────────

#[tokio::test]
async fn test_field_reference_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fields/text-input"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEXT_INPUT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let handler = handler(None, &format!("{}/fields", server.uri()));

    let resp = send_unwrap(
        &handler,
        tool_call(20, "get_field_reference", json!({ "field": "Text-Input" })),
    )
    .await;
    let record: Value = serde_json::from_str(&tool_text(&resp)).unwrap();
    assert_eq!(record["name"], "Text Input");
    assert_eq!(record["description"], "A basic input.");
    assert_eq!(record["usage"], "TextInput::make('name')");
    assert_eq!(record["examples"][0]["title"], "Usage");
    assert!(record.get("properties").is_none());

    // Second lookup through the resource path is served from cache.
    let resp = send_unwrap(
        &handler,
        mcp_request(21, "resources/read", json!({ "uri": "docs://field/text-input" })),
    )
    .await;
    let text = resp["result"]["contents"][0]["text"].as_str().unwrap();
    let cached: Value = serde_json::from_str(text).unwrap();
    assert_eq!(cached, record);

    let stats = send_unwrap(
        &handler,
        mcp_request(22, "resources/read", json!({ "uri": "docs://stats" })),
    )
    .await;
    let stats: Value =
        serde_json::from_str(stats["result"]["contents"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(stats["cached_fields"], 1);
}

#[tokio::test]
async fn test_remote_errors_map_to_application_codes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let handler = handler(None, &server.uri());

    let resp = send_unwrap(
        &handler,
        tool_call(30, "get_field_reference", json!({ "field": "missing" })),
    )
    .await;
    assert_eq!(error_code(&resp), -32850);

    let resp = send_unwrap(
        &handler,
        tool_call(31, "get_field_reference", json!({ "field": "broken" })),
    )
    .await;
    assert_eq!(error_code(&resp), -32851);
    assert_eq!(resp["error"]["data"]["status"], 500);
}

// ─────────────────────── local docs ───────────────────────

#[tokio::test]
async fn test_local_docs_tools() {
    let dir = docs_tree();
    let handler = offline_handler(Some(&dir));

    let resp = send_unwrap(&handler, tool_call(40, "list_docs", json!({}))).await;
    let listing: Value = serde_json::from_str(&tool_text(&resp)).unwrap();
    assert_eq!(
        listing["entries"],
        json!([
            { "name": "forms", "kind": "directory" },
            { "name": "intro.md", "kind": "file" }
        ])
    );

    let resp = send_unwrap(&handler, tool_call(41, "read_doc", json!({ "path": "forms/select" }))).await;
    assert!(tool_text(&resp).contains("searchable"));

    let resp = send_unwrap(
        &handler,
        tool_call(42, "search_docs", json!({ "query": "SEARCHABLE" })),
    )
    .await;
    let found: Value = serde_json::from_str(&tool_text(&resp)).unwrap();
    assert_eq!(found["matches"], json!(["forms/select.md"]));

    let resp = send_unwrap(
        &handler,
        mcp_request(43, "resources/read", json!({ "uri": "docs://file/intro.md" })),
    )
    .await;
    assert_eq!(resp["result"]["contents"][0]["mimeType"], "text/markdown");
}

#[tokio::test]
async fn test_local_docs_errors() {
    let dir = docs_tree();
    let handler = offline_handler(Some(&dir));

    let resp = send_unwrap(
        &handler,
        tool_call(50, "read_doc", json!({ "path": "../etc/passwd" })),
    )
    .await;
    assert_eq!(error_code(&resp), -32602);

    let resp = send_unwrap(&handler, tool_call(51, "read_doc", json!({ "path": "nope" }))).await;
    assert_eq!(error_code(&resp), -32850);

    let resp = send_unwrap(&handler, tool_call(52, "search_docs", json!({ "query": "" }))).await;
    assert_eq!(error_code(&resp), -32602);
}

#[tokio::test]
async fn test_explain_field_prompt() {
    let handler = offline_handler(None);

    let resp = send_unwrap(
        &handler,
        mcp_request(60, "prompts/get", json!({ "name": "explain_field", "arguments": { "field": "select" } })),
    )
    .await;
    let text = resp["result"]["messages"][0]["content"]["text"].as_str().unwrap();
    assert!(text.contains("get_field_reference"));
    assert!(text.contains("select"));

    let resp = send_unwrap(
        &handler,
        mcp_request(61, "prompts/get", json!({ "name": "explain_field" })),
    )
    .await;
    assert_eq!(error_code(&resp), -32602);
}

// ─────────────────────── stdio framing ───────────────────────

#[tokio::test]
async fn test_stdio_stream() {
    let transport = StdioTransport::new(offline_handler(None));
    let input = concat!(
        "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n",
        "\n",
        "{not json}\n",
        "{\"jsonrpc\":\"2.0\",\"method\":\"notifications/initialized\"}\n",
        "{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"nope\"}\n",
    );
    let mut output = Vec::new();
    transport.serve(input.as_bytes(), &mut output).await.unwrap();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["id"], 1);
    assert_eq!(lines[0]["result"], json!({}));
    assert_eq!(lines[1]["id"], Value::Null);
    assert_eq!(error_code(&lines[1]), -32700);
    assert_eq!(lines[2]["id"], 2);
    assert_eq!(error_code(&lines[2]), -32601);
}
