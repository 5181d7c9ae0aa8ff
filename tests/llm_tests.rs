//! LLM client tests against mocked provider endpoints
//!
//! These tests use wiremock to stand in for the hosted APIs and validate:
//! - Request shape (endpoint, API key header, instruction prefix)
//! - Error and timeout handling
//! - The assistant fallback through a real HTTP client
//! - The full chat route wired to a configuration-driven factory

use axum_test::TestServer;
use serde_json::json;
use softsell::{
    AppState, ConfigBasedLLMFactory, GenerationSettings, LLMClientFactoryTrait, Provider,
    SoftSellConfig, SoftSellConfigManager, SupportAssistant,
    api::routes::create_app,
    llm::assistant::{DEFAULT_FALLBACK_REPLY, DEFAULT_SYSTEM_PROMPT},
    types::ChatResponse,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GEMINI_PATH: &str = "/models/gemini-1.5-flash:generateContent";

// ============= Helper Functions =============

/// Create a mock Gemini generateContent response
fn mock_gemini_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": text}]
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "modelVersion": "gemini-1.5-flash"
    })
}

fn gemini_provider(server: &MockServer, timeout: Duration) -> Provider {
    Provider::Gemini {
        api_key: "test-key".to_string(),
        api_base: server.uri(),
        model: "gemini-1.5-flash".to_string(),
        settings: GenerationSettings {
            timeout,
            ..GenerationSettings::default()
        },
    }
}

/// Config pointing the Gemini provider at the mock server
fn mock_config(server: &MockServer, key_env: &str) -> SoftSellConfig {
    // SAFETY: Each test uses its own variable name
    unsafe {
        std::env::set_var(key_env, "test-key");
    }

    let mut config = SoftSellConfig::default();
    config.assistant.api_key_env = Some(key_env.to_string());
    config.assistant.api_base = Some(server.uri());
    config.assistant.timeout_secs = 5;
    config
}

// ============= Gemini Client Tests =============

#[tokio::test]
async fn test_gemini_sends_prefixed_prompt_with_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user"}],
            "generationConfig": {"temperature": 0.7}
        })))
        .and(body_string_contains("User: How do I sell my license?"))
        .and(body_string_contains("customer support assistant"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_gemini_response("Upload it and we will value it.")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = gemini_provider(&mock_server, Duration::from_secs(5))
        .create_client()
        .unwrap();
    let text = client
        .generate_with_system(DEFAULT_SYSTEM_PROMPT, "How do I sell my license?")
        .await
        .unwrap();

    assert_eq!(text, "Upload it and we will value it.");
}

#[tokio::test]
async fn test_gemini_api_error_message_is_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "code": 429,
                "message": "Resource has been exhausted",
                "status": "RESOURCE_EXHAUSTED"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = gemini_provider(&mock_server, Duration::from_secs(5))
        .create_client()
        .unwrap();
    let err = client.generate("Hello").await.unwrap_err().to_string();

    assert!(err.contains("429"));
    assert!(err.contains("Resource has been exhausted"));
}

#[tokio::test]
async fn test_gemini_timeout_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_gemini_response("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = gemini_provider(&mock_server, Duration::from_millis(200))
        .create_client()
        .unwrap();
    let err = client.generate("Hello").await.unwrap_err().to_string();

    assert!(err.contains("timed out"));
}

#[tokio::test]
async fn test_gemini_malformed_body_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = gemini_provider(&mock_server, Duration::from_secs(5))
        .create_client()
        .unwrap();

    assert!(client.generate("Hello").await.is_err());
}

// ============= Assistant Tests =============

#[tokio::test]
async fn test_assistant_falls_back_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let client = gemini_provider(&mock_server, Duration::from_secs(5))
        .create_client()
        .unwrap();
    let reply = SupportAssistant::new(client, DEFAULT_SYSTEM_PROMPT, DEFAULT_FALLBACK_REPLY)
        .reply("What is the refund policy?")
        .await;

    assert!(reply.is_fallback);
    assert_eq!(reply.text, DEFAULT_FALLBACK_REPLY);
}

#[tokio::test]
async fn test_config_factory_targets_configured_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_gemini_response("Hi!")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = mock_config(&mock_server, "SOFTSELL_LLM_TEST_FACTORY_KEY");
    let factory = ConfigBasedLLMFactory::new(Arc::new(SoftSellConfigManager::from_config(config)));

    let client = factory.create_default().await.unwrap();
    assert_eq!(client.model_name(), "gemini-1.5-flash");
    assert_eq!(client.generate("Hello").await.unwrap(), "Hi!");
}

// ============= End-to-end Chat Tests =============

#[tokio::test]
async fn test_chat_route_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(body_string_contains("User: How do I contact support?"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(mock_gemini_response("Email contact@softsell.com.")),
        )
        .mount(&mock_server)
        .await;

    let config_manager = Arc::new(SoftSellConfigManager::from_config(mock_config(
        &mock_server,
        "SOFTSELL_LLM_TEST_E2E_KEY",
    )));
    let state = AppState {
        llm_factory: Arc::new(ConfigBasedLLMFactory::new(Arc::clone(&config_manager))),
        config_manager,
    };
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server
        .post("/api/chat")
        .json(&json!({"message": "How do I contact support?"}))
        .await;

    response.assert_status_ok();
    let body: ChatResponse = response.json();
    assert_eq!(body.response, "Email contact@softsell.com.");
    assert!(!body.fallback);
}

#[tokio::test]
async fn test_chat_route_falls_back_when_upstream_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config_manager = Arc::new(SoftSellConfigManager::from_config(mock_config(
        &mock_server,
        "SOFTSELL_LLM_TEST_UPSTREAM_KEY",
    )));
    let state = AppState {
        llm_factory: Arc::new(ConfigBasedLLMFactory::new(Arc::clone(&config_manager))),
        config_manager,
    };
    let server = TestServer::new(create_app(state)).unwrap();

    let body: ChatResponse = server
        .post("/api/chat")
        .json(&json!({"message": "Hello"}))
        .await
        .json();

    assert_eq!(body.response, DEFAULT_FALLBACK_REPLY);
    assert!(body.fallback);
}

// ============= OpenAI Client Tests =============

#[cfg(feature = "openai")]
#[tokio::test]
async fn test_openai_sends_system_and_user_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [
                {"role": "system"},
                {"role": "user", "content": "What is the refund policy?"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "gpt-3.5-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Refunds take 5 business days."},
                "finish_reason": "stop"
            }]
        })))
        .mount(&mock_server)
        .await;

    let provider = Provider::OpenAI {
        api_key: "test-key".to_string(),
        api_base: mock_server.uri(),
        model: "gpt-3.5-turbo".to_string(),
        settings: GenerationSettings::default(),
    };
    let client = provider.create_client().unwrap();

    let text = client
        .generate_with_system(DEFAULT_SYSTEM_PROMPT, "What is the refund policy?")
        .await
        .unwrap();
    assert_eq!(text, "Refunds take 5 business days.");
}
