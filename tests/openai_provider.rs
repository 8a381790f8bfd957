//! Integration tests for the OpenAI provider against a local mock server.

use nutrirag::domain::llm::{LlmProvider, LlmRequest};
use nutrirag::domain::DomainError;
use nutrirag::infrastructure::llm::{HttpClient, OpenAiProvider};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chat_completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19 }
    })
}

#[tokio::test]
async fn completes_a_chat_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(
            serde_json::json!({ "model": "gpt-4o-mini" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body("8.5")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(HttpClient::new(), "test-key", server.uri());
    let request = LlmRequest::builder()
        .system("score this")
        .user("a response")
        .build();

    let response = provider.chat("gpt-4o-mini", request).await.unwrap();

    assert_eq!(response.content(), "8.5");
}

#[tokio::test]
async fn surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "message": "Rate limit reached", "type": "requests" }
        })))
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(HttpClient::new(), "test-key", server.uri());
    let request = LlmRequest::builder().user("hello").build();

    let err = provider.chat("gpt-4o-mini", request).await.unwrap_err();

    match err {
        DomainError::Provider { message, .. } => assert!(message.contains("429")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn rejects_malformed_response_bodies() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "unexpected": true })),
        )
        .mount(&server)
        .await;

    let provider = OpenAiProvider::with_base_url(HttpClient::new(), "test-key", server.uri());
    let request = LlmRequest::builder().user("hello").build();

    let result = provider.chat("gpt-4o-mini", request).await;

    assert!(result.is_err());
}
