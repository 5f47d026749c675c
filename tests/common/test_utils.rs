use super::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use flashcard_generator::{
    config::CorsConfig,
    flashcards::FlashcardGenerator,
    server::{AppState, router},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn create_test_cors() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
    }
}

/// Build the application router around a mock client
pub fn create_test_app(client: Arc<MockLlmClient>) -> Router {
    let state = AppState {
        generator: Arc::new(FlashcardGenerator::new(client)),
    };
    router(state, &create_test_cors())
}

pub fn generate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"
  cors:
    allowed_origins:
      - "https://cards.example.com"

llm:
  base_url: "http://localhost:9999/v1"
  api_key: "test-api-key"
  model: "gpt-4o-mini"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
