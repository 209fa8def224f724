//! Fixtures shared by the end-to-end scenarios: an in-process stand-in for
//! the Humanloop API and a host that records what the user would see.

use application::host::Host;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct FakeState {
    reply: Value,
    generate_calls: Mutex<Vec<Value>>,
    feedback_calls: Mutex<Vec<Value>>,
    api_keys: Mutex<Vec<String>>,
}

async fn generate(State(state): State<Arc<FakeState>>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    remember_key(&state, &headers);
    state.generate_calls.lock().unwrap().push(body);
    if state.reply.is_null() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream failure").into_response();
    }
    Json(state.reply.clone()).into_response()
}

async fn feedback(State(state): State<Arc<FakeState>>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    remember_key(&state, &headers);
    state.feedback_calls.lock().unwrap().push(body);
    Json(json!({ "status": "ok" }))
}

fn remember_key(state: &FakeState, headers: &HeaderMap) {
    let key = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.api_keys.lock().unwrap().push(key);
}

pub struct FakeHumanloop {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeHumanloop {
    /// Serves `reply` from `/v2/generate`. A `Value::Null` reply makes
    /// generate answer HTTP 500.
    pub async fn start(reply: Value) -> Self {
        let state = Arc::new(FakeState {
            reply,
            ..FakeState::default()
        });
        let router = Router::new()
            .route("/v2/generate", post(generate))
            .route("/v2/feedback", post(feedback))
            .with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}/v2"),
            state,
        }
    }

    pub fn generate_calls(&self) -> Vec<Value> {
        self.state.generate_calls.lock().unwrap().clone()
    }

    pub fn feedback_calls(&self) -> Vec<Value> {
        self.state.feedback_calls.lock().unwrap().clone()
    }

    pub fn api_keys(&self) -> Vec<String> {
        self.state.api_keys.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/v2")
}

#[derive(Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<String>>,
    panel_open: AtomicBool,
}

impl NoticeLog {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }
}

impl Host for NoticeLog {
    fn notice(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn is_panel_open(&self) -> bool {
        self.panel_open.load(Ordering::SeqCst)
    }

    fn open_panel(&self) {
        self.panel_open.store(true, Ordering::SeqCst);
    }
}
