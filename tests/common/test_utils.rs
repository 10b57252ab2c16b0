use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use gemini_ask::{
    config::LlmConfig,
    server::{self, handlers::AppState},
};
use std::sync::Arc;

use super::mocks::MockGenerationClient;

/// Create a router backed by the given mock client
pub fn create_test_app(client: MockGenerationClient) -> Router {
    server::router(AppState::new(Arc::new(client)))
}

/// Create an LLM configuration pointing at a local mock provider
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        ..LlmConfig::default()
    }
}

/// Build a POST /ask request with a raw body
pub fn ask_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ask")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  env_file: "test.env"
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4000/v1beta"
  model: "gemini-1.5-pro"
  api_key_env: "GEMINI_API_KEY"
  request_timeout_secs: 30
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
