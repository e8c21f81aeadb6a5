use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chatgate_engine::{
    AutoEngine, ChatMessage, CompletionEngine, ModelCatalog, OpenAiCompatBackend,
};
use chatgate_models::Role;

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl_test123",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

async fn mock_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

fn user_turn(content: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::new(Role::User, content)]
}

#[tokio::test]
async fn test_create_returns_text_and_provider() {
    let server = MockServer::start().await;
    mock_completion(&server, "hello there").await;

    let engine = AutoEngine::new(vec![OpenAiCompatBackend::new("primary", server.uri())]);
    let catalog = ModelCatalog::from_engine(&engine).unwrap();
    let model = catalog.resolve("gpt-4o-mini").unwrap();

    let completion = engine.create(&model, &user_turn("hi")).await.unwrap();
    assert_eq!(completion.text, "hello there");
    assert_eq!(completion.provider.as_deref(), Some("primary"));
}

#[tokio::test]
async fn test_create_sends_registered_upstream_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "messages": [{ "role": "user", "content": "hi" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let engine = AutoEngine::new(vec![OpenAiCompatBackend::new("primary", server.uri())]);
    let catalog = ModelCatalog::from_engine(&engine).unwrap();
    let model = catalog.resolve("gpt-4o-mini").unwrap();

    engine.create(&model, &user_turn("hi")).await.unwrap();
}

#[tokio::test]
async fn test_create_fails_over_to_next_backend() {
    let down = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&down)
        .await;

    let up = MockServer::start().await;
    mock_completion(&up, "rescued").await;

    let engine = AutoEngine::new(vec![
        OpenAiCompatBackend::new("flaky", down.uri()),
        OpenAiCompatBackend::new("steady", up.uri()),
    ]);
    let catalog = ModelCatalog::from_engine(&engine).unwrap();
    let model = catalog.resolve("gpt-4o-mini").unwrap();

    let completion = engine.create(&model, &user_turn("hi")).await.unwrap();
    assert_eq!(completion.text, "rescued");
    assert_eq!(completion.provider.as_deref(), Some("steady"));
}

#[tokio::test]
async fn test_create_surfaces_last_error_when_all_backends_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Cloudflare checkpoint"))
        .mount(&server)
        .await;

    let engine = AutoEngine::new(vec![OpenAiCompatBackend::new("blocked", server.uri())]);
    let catalog = ModelCatalog::from_engine(&engine).unwrap();
    let model = catalog.resolve("gpt-4o-mini").unwrap();

    let err = engine.create(&model, &user_turn("hi")).await.unwrap_err();
    assert!(err.to_string().contains("Cloudflare"));
}

#[tokio::test]
async fn test_create_with_no_backends_fails() {
    let engine = AutoEngine::new(Vec::new());
    let catalog = ModelCatalog::from_engine(&engine).unwrap();
    let model = catalog.resolve("gpt-4o-mini").unwrap();

    let err = engine.create(&model, &user_turn("hi")).await.unwrap_err();
    assert!(err.to_string().contains("no backends"));
}

#[tokio::test]
async fn test_backend_rejects_response_without_choices() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let backend = OpenAiCompatBackend::new("empty", server.uri());
    let err = backend
        .chat_completion("gpt-4o-mini", &user_turn("hi"))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("no choices"));
}
