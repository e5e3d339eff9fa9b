// tests/ask_api.rs
// End-to-end tests for POST /api/ask against a simulated Gemini backend.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use timecall::characters::CharacterRoster;
use timecall::config::TimecallConfig;
use timecall::llm::create_shared_client;
use timecall::web::{AppState, create_router};

fn test_config(base_url: &str, api_key: &str) -> TimecallConfig {
    TimecallConfig {
        gemini_api_key: api_key.to_string(),
        gemini_model: "gemini-test".to_string(),
        gemini_base_url: base_url.to_string(),
        gemini_timeout_secs: 5,
        default_character: "einstein".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origin: "*".to_string(),
    }
}

fn test_app(config: TimecallConfig) -> Router {
    let state = AppState::new(config, CharacterRoster::builtin(), create_shared_client());
    create_router(state)
}

const GEMINI_PATH: &str = "/models/gemini-test:generateContent";

async fn mock_gemini_reply(server: &MockServer, reply: Value) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .mount(server)
        .await;
}

async fn post_ask(app: Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/ask")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn ask_returns_reply_for_default_character() {
    let server = MockServer::start().await;
    mock_gemini_reply(
        &server,
        json!({
            "candidates": [
                { "content": { "parts": [ { "text": "  Time is relative, my friend.  " } ] } }
            ]
        }),
    )
    .await;

    let app = test_app(test_config(&server.uri(), "test-key"));
    let (status, body) = post_ask(app, r#"{"message": "Hi"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Time is relative, my friend.");
}

#[tokio::test]
async fn ask_prefers_direct_text_field() {
    let server = MockServer::start().await;
    mock_gemini_reply(
        &server,
        json!({
            "text": "Straight answer.",
            "candidates": [
                { "content": { "parts": [ { "text": "candidate answer" } ] } }
            ]
        }),
    )
    .await;

    let app = test_app(test_config(&server.uri(), "test-key"));
    let (status, body) = post_ask(app, r#"{"message": "Hi"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Straight answer.");
}

#[tokio::test]
async fn ask_sends_steering_first_history_mapped_message_last() {
    let server = MockServer::start().await;
    mock_gemini_reply(
        &server,
        json!({ "candidates": [ { "content": { "parts": [ { "text": "ok" } ] } } ] }),
    )
    .await;

    let app = test_app(test_config(&server.uri(), "test-key"));
    let request_body = json!({
        "message": "What is time?",
        "character_id": "einstein",
        "history": [
            { "role": "user", "content": "Hello" },
            { "role": "assistant", "content": "Guten Tag!" },
            { "role": "user", "content": "   " },
            { "role": "narrator", "content": "The line crackles." }
        ]
    });
    let (status, _) = post_ask(app, &request_body.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let outbound: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let contents = outbound["contents"].as_array().unwrap();

    // steering + 3 surviving history turns + the new message
    assert_eq!(contents.len(), 5);

    let steering = contents[0]["parts"][0]["text"].as_str().unwrap();
    assert_eq!(contents[0]["role"], "user");
    assert!(steering.starts_with("You are Albert Einstein"));

    assert_eq!(contents[1]["role"], "user");
    assert_eq!(contents[1]["parts"][0]["text"], "Hello");
    assert_eq!(contents[2]["role"], "model");
    assert_eq!(contents[2]["parts"][0]["text"], "Guten Tag!");
    // unrecognized role lands as user input; the blank turn is gone
    assert_eq!(contents[3]["role"], "user");
    assert_eq!(contents[3]["parts"][0]["text"], "The line crackles.");

    assert_eq!(contents[4]["role"], "user");
    assert_eq!(contents[4]["parts"][0]["text"], "What is time?");
}

#[tokio::test]
async fn ask_rejects_empty_message() {
    let app = test_app(test_config("http://127.0.0.1:1", "test-key"));
    let (status, body) = post_ask(app, r#"{"message": ""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "message is required");
}

#[tokio::test]
async fn ask_rejects_whitespace_message_and_missing_body_fields() {
    let app = test_app(test_config("http://127.0.0.1:1", "test-key"));
    let (status, body) = post_ask(app.clone(), r#"{"message": "   "}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "message is required");

    let (status, body) = post_ask(app, r#"{}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "message is required");
}

#[tokio::test]
async fn ask_treats_invalid_json_as_empty_request() {
    let app = test_app(test_config("http://127.0.0.1:1", "test-key"));
    let (status, body) = post_ask(app, "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "message is required");
}

#[tokio::test]
async fn ask_rejects_unknown_character_id() {
    let app = test_app(test_config("http://127.0.0.1:1", "test-key"));
    let (status, body) =
        post_ask(app, r#"{"message": "Hi", "character_id": "nonexistent"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("nonexistent"), "error was: {error}");
}

#[tokio::test]
async fn ask_without_api_key_is_a_config_error_and_never_calls_gemini() {
    let server = MockServer::start().await;
    mock_gemini_reply(
        &server,
        json!({ "candidates": [ { "content": { "parts": [ { "text": "unreachable" } ] } } ] }),
    )
    .await;

    let app = test_app(test_config(&server.uri(), ""));
    let (status, body) = post_ask(app, r#"{"message": "Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "text generation is not configured on this server"
    );
    // The generic message never leaks the missing-credential detail
    assert!(body.get("details").is_none());

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "Gemini should never have been called");
}

#[tokio::test]
async fn ask_surfaces_upstream_failure_with_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let app = test_app(test_config(&server.uri(), "test-key"));
    let (status, body) = post_ask(app, r#"{"message": "Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate response from Gemini");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("quota exceeded"), "details were: {details}");
}

#[tokio::test]
async fn ask_fails_when_response_has_no_text() {
    let server = MockServer::start().await;
    mock_gemini_reply(&server, json!({ "candidates": [] })).await;

    let app = test_app(test_config(&server.uri(), "test-key"));
    let (status, body) = post_ask(app, r#"{"message": "Hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to generate response from Gemini");
    let details = body["details"].as_str().unwrap();
    assert!(
        details.contains("did not contain any text"),
        "details were: {details}"
    );
}
