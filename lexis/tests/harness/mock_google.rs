//! Mock Google Cloud Translation backend for integration tests
//!
//! Records every request it receives and answers with a canned reply

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a JSON body
    Json(Value),
    /// Arbitrary status with a raw text body
    Status(u16, String),
    /// 200 after sleeping, for deadline tests
    Delayed(Duration, Value),
}

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

struct MockState {
    reply: Reply,
    requests: Mutex<Vec<Recorded>>,
}

/// Mock translation backend bound to a random local port
pub struct MockGoogle {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

impl MockGoogle {
    /// Start a mock returning the given translations, in order
    pub async fn translating(texts: &[&str]) -> anyhow::Result<Self> {
        let translations: Vec<Value> = texts
            .iter()
            .map(|text| serde_json::json!({ "translatedText": text }))
            .collect();

        Self::start(Reply::Json(serde_json::json!({ "translations": translations }))).await
    }

    pub async fn start(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to configure in place of `https://translation.googleapis.com/v3`
    pub fn base_url(&self) -> String {
        format!("http://{}/v3", self.addr)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }
}

impl Drop for MockGoogle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    state.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_owned(),
        content_type,
        body,
    });

    match &state.reply {
        Reply::Json(value) => Json(value.clone()).into_response(),
        Reply::Status(status, text) => (StatusCode::from_u16(*status).unwrap(), text.clone()).into_response(),
        Reply::Delayed(delay, value) => {
            tokio::time::sleep(*delay).await;
            Json(value.clone()).into_response()
        }
    }
}
