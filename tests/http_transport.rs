//! End-to-end tests for the HTTP transport.
//!
//! Requests go through the full axum router (CORS and tracing layers
//! included) without binding a socket.

use axum::{Router, body::Body};
use bytes::Bytes;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use temp_conversion_mcp_server::core::{
    Config, McpServer, TransportConfig,
    transport::{HttpConfig, http::HttpTransport},
};

fn app() -> Router {
    let config = Config::default();
    let server = McpServer::new(config);
    HttpTransport::new(HttpConfig::default()).router(server)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes: Bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn rpc(app: Router, payload: Value) -> Value {
    let response = app.oneshot(post(payload.to_string())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

async fn call(name: &str, arguments: Value) -> Value {
    rpc(
        app(),
        json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }),
    )
    .await
}

#[tokio::test]
async fn test_tools_list_over_http() {
    let response = rpc(
        app(),
        json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }),
    )
    .await;

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);

    let c2f = tools
        .iter()
        .find(|t| t["name"] == "celsius_to_fahrenheit")
        .unwrap();
    assert_eq!(c2f["description"], "Convert Celsius to Fahrenheit.");
    assert_eq!(c2f["inputSchema"]["required"], json!(["celsius"]));

    let f2c = tools
        .iter()
        .find(|t| t["name"] == "fahrenheit_to_celsius")
        .unwrap();
    assert_eq!(f2c["inputSchema"]["required"], json!(["fahrenheit"]));
}

#[tokio::test]
async fn test_reference_points() {
    for (celsius, fahrenheit) in [(0.0, 32.0), (100.0, 212.0), (-40.0, -40.0)] {
        let response = call("celsius_to_fahrenheit", json!({ "celsius": celsius })).await;
        assert_eq!(response["id"], 7);
        assert_eq!(response["result"]["structuredContent"]["result"], fahrenheit);

        let response = call("fahrenheit_to_celsius", json!({ "fahrenheit": fahrenheit })).await;
        assert_eq!(response["result"]["structuredContent"]["result"], celsius);
    }
}

#[tokio::test]
async fn test_round_trip_over_http() {
    let celsius = 23.456;
    let forward = call("celsius_to_fahrenheit", json!({ "celsius": celsius })).await;
    let fahrenheit = forward["result"]["structuredContent"]["result"]
        .as_f64()
        .unwrap();

    let back = call("fahrenheit_to_celsius", json!({ "fahrenheit": fahrenheit })).await;
    let result = back["result"]["structuredContent"]["result"].as_f64().unwrap();
    assert!((result - celsius).abs() < 1e-9);
}

#[tokio::test]
async fn test_non_numeric_argument_is_rejected() {
    let response = call("celsius_to_fahrenheit", json!({ "celsius": "boiling" })).await;
    assert_eq!(response["error"]["code"], -32602);
    assert!(response.get("result").is_none());

    let response = call("fahrenheit_to_celsius", json!({})).await;
    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unknown_tool() {
    let response = call("kelvin_to_celsius", json!({ "kelvin": 0 })).await;
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Unknown tool: kelvin_to_celsius");
}

#[tokio::test]
async fn test_overflow_returns_tool_error() {
    let response = call("celsius_to_fahrenheit", json!({ "celsius": f64::MAX })).await;
    assert_eq!(response["result"]["isError"], true);
}

#[tokio::test]
async fn test_notification_is_accepted_with_empty_body() {
    let payload = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    let response = app().oneshot(post(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_malformed_json_gets_parse_error() {
    let response = app()
        .oneshot(post(r#"{"jsonrpc": "2.0", "id": 1, "#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], -32700);
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn test_request_without_method_is_invalid() {
    let response = app()
        .oneshot(post(json!({ "jsonrpc": "2.0", "id": 3 }).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], 3);
}

#[tokio::test]
async fn test_health_and_root() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");

    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let info = body_json(response).await;
    assert_eq!(info["name"], "temp-conversion-mcp-server");
    assert_eq!(info["endpoints"]["rpc"], "/mcp");
    assert_eq!(
        info["tools"],
        json!(["celsius_to_fahrenheit", "fahrenheit_to_celsius"])
    );
}

#[tokio::test]
async fn test_custom_rpc_path() {
    let config = match TransportConfig::http(8001, "0.0.0.0") {
        TransportConfig::Http(mut cfg) => {
            cfg.rpc_path = "/rpc".to_string();
            cfg
        }
        #[allow(unreachable_patterns)]
        _ => unreachable!(),
    };
    let app = HttpTransport::new(config).router(McpServer::new(Config::default()));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/rpc")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }).to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["result"], json!({}));
}
