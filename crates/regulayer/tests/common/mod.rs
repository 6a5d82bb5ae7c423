// Shared helpers for the integration tests: a local stand-in for the
// Regulayer API that records every request and answers with a fixed status.
//
// The server runs on its own thread with its own tokio runtime because the
// SDK uses reqwest's blocking client, which must not run inside a runtime.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use serde_json::Value;

use regulayer::{Client, ClientConfig};

pub const TEST_API_KEY: &str = "rl_test_4f2a9c";

/// One request as seen by the mock endpoint.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    delay: Duration,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn capture(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    state.requests.lock().unwrap().push(CapturedRequest {
        method,
        path: uri.path().to_string(),
        headers,
        body: body.to_vec(),
    });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.status
}

/// A running mock endpoint.
pub struct MockApi {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockApi {
    /// Start a mock that answers every request with `status`.
    pub fn start(status: u16) -> Self {
        Self::start_with_delay(status, Duration::ZERO)
    }

    /// Start a mock that waits `delay` before answering each request.
    pub fn start_with_delay(status: u16, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            delay,
            requests: Arc::clone(&requests),
        };

        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind mock listener");
                tx.send(listener.local_addr().expect("local addr"))
                    .expect("report addr");
                let app = Router::new().fallback(capture).with_state(state);
                axum::serve(listener, app).await.expect("serve mock");
            });
        });

        let addr = rx.recv().expect("mock server started");
        Self { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client pointed at this mock with [`TEST_API_KEY`].
    pub fn client(&self) -> Client {
        Client::new(ClientConfig::new(TEST_API_KEY).with_endpoint(self.url()))
            .expect("build client")
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

/// Build a JSON object payload from a `json!` literal.
pub fn object(value: Value) -> regulayer::Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}
