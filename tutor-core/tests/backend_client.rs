//! Integration tests for the backend client against a mock HTTP backend
//!
//! Run with: cargo test -p tutor-core --test backend_client

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tutor_core::{AskRequest, Config, NO_RESPONSE, client};

/// Canned response plus a log of every body the mock backend received
#[derive(Clone)]
struct MockState {
    ask_reply: Value,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockState {
    fn new(ask_reply: Value) -> Self {
        Self {
            ask_reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

async fn mock_ask(State(state): State<MockState>, Json(body): Json<Value>) -> Json<Value> {
    state.requests.lock().unwrap().push(body);
    Json(state.ask_reply.clone())
}

async fn mock_chat_ok(Json(_body): Json<Value>) -> Json<Value> {
    Json(json!({"y": 2}))
}

async fn mock_chat_err(Json(_body): Json<Value>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": "backend exploded"})),
    )
}

async fn spawn_backend(app: Router) -> Config {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Config::with_backend_url(format!("http://{addr}"))
}

async fn spawn_ask_backend(state: MockState) -> Config {
    let app = Router::new()
        .route("/ask", post(mock_ask))
        .with_state(state);
    spawn_backend(app).await
}

#[tokio::test]
async fn ask_sends_exactly_one_request_with_flat_json_body() {
    let state = MockState::new(json!({"answer": "ok"}));
    let config = spawn_ask_backend(state.clone()).await;

    let request = AskRequest::new("Class 10", "Math", "What is a prime number?");
    client::ask(&request, &config).await.unwrap();

    let requests = state.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        json!({
            "level": "Class 10",
            "subject": "Math",
            "question": "What is a prime number?"
        })
    );
}

#[tokio::test]
async fn ask_returns_the_backend_answer() {
    let state = MockState::new(json!({"answer": "42"}));
    let config = spawn_ask_backend(state).await;

    let response = client::ask(&AskRequest::default(), &config).await.unwrap();

    assert_eq!(response.answer_or_default(), "42");
}

#[tokio::test]
async fn ask_falls_back_when_answer_is_missing() {
    let state = MockState::new(json!({}));
    let config = spawn_ask_backend(state).await;

    let response = client::ask(&AskRequest::default(), &config).await.unwrap();

    assert_eq!(response.answer_or_default(), NO_RESPONSE);
}

#[tokio::test]
async fn ask_permits_empty_fields() {
    let state = MockState::new(json!({"answer": "still answered"}));
    let config = spawn_ask_backend(state.clone()).await;

    let response = client::ask(&AskRequest::default(), &config).await.unwrap();

    assert_eq!(response.answer_or_default(), "still answered");
    assert_eq!(
        state.requests.lock().unwrap()[0],
        json!({"level": "", "subject": "", "question": ""})
    );
}

#[tokio::test]
async fn ask_fails_on_error_status() {
    let app = Router::new().route("/ask", post(mock_chat_err));
    let config = spawn_backend(app).await;

    let result = client::ask(&AskRequest::default(), &config).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn send_message_returns_parsed_body_verbatim() {
    let app = Router::new().route("/api/chat", post(mock_chat_ok));
    let config = spawn_backend(app).await;

    let reply = client::send_message(&json!({"x": 1}), &config).await.unwrap();

    assert_eq!(reply, json!({"y": 2}));
}

#[tokio::test]
async fn send_message_fails_on_error_status_regardless_of_body() {
    let app = Router::new().route("/api/chat", post(mock_chat_err));
    let config = spawn_backend(app).await;

    let result = client::send_message(&json!({"x": 1}), &config).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Backend error"));
}
