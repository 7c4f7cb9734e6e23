//! In-process mock backend for API tests
//!
//! Binds an axum server to an ephemeral port, records every request it
//! receives and answers each one with a configurable status and JSON body.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::{Json, Router};
use reqwest::Url;
use serde_json::Value as JsonValue;

use crate::client::ApiClient;
use crate::config::ApiConfig;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> JsonValue {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply: Arc<Mutex<(StatusCode, JsonValue)>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: MockState,
}

impl MockBackend {
    pub async fn start() -> Self {
        init_tracing();

        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new((StatusCode::OK, JsonValue::Object(Default::default())))),
        };

        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Failed to read mock address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend stopped");
        });

        Self { addr, state }
    }

    /// Server root, e.g. `http://127.0.0.1:41234`
    pub fn root(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client whose relative base URLs resolve against this server
    pub fn client(&self, base_url: &str) -> ApiClient {
        let origin = Url::parse(&format!("{}/", self.root())).unwrap();
        ApiClient::with_builder(
            ApiConfig::new(base_url, origin),
            reqwest::Client::builder().no_proxy(),
        )
        .expect("Failed to build client")
    }

    pub fn respond_with(&self, status: u16, body: JsonValue) {
        let status = StatusCode::from_u16(status).unwrap();
        *self.state.reply.lock().unwrap() = (status, body);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only request received so far; panics unless exactly one arrived
    pub fn single_request(&self) -> RecordedRequest {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.remove(0)
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<JsonValue>) {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    });

    let (status, body) = state.reply.lock().unwrap().clone();
    (status, Json(body))
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
