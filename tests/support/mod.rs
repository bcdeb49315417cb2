//! Purpose: Loopback mock node answering JSON-RPC POSTs on `/rpc`.
//! Role: Shared fixture for the C ABI and CLI integration tests.
//! Invariants: Binds 127.0.0.1 on an ephemeral port; shut down on drop.
//! Invariants: Every request body is recorded for later assertions.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};
use tokio::sync::oneshot;

pub type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

/// How the mock node answers.
#[derive(Clone, Debug)]
pub enum Reply {
    /// `result` echoing the request id.
    Result(Value),
    /// JSON-RPC `error` member.
    RpcError { code: i64, message: String },
    /// `result` with an id the client never sent.
    WrongId(Value),
    /// Bare HTTP status with an empty body.
    Status(u16),
}

struct NodeState {
    reply: Reply,
    requests: Mutex<Vec<Value>>,
}

pub struct MockNode {
    base_url: String,
    state: Arc<NodeState>,
    shutdown: Option<oneshot::Sender<()>>,
    runtime: Option<tokio::runtime::Runtime>,
}

impl MockNode {
    pub fn start(reply: Reply) -> TestResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let listener = runtime.block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))?;
        let addr = listener.local_addr()?;
        let state = Arc::new(NodeState {
            reply,
            requests: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/rpc", post(handle_rpc))
            .with_state(state.clone());
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        runtime.spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
        Ok(Self {
            base_url: format!("http://{addr}"),
            state,
            shutdown: Some(shutdown_tx),
            runtime: Some(runtime),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<Value> {
        self.state
            .requests
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
            .clone()
    }
}

impl Drop for MockNode {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

async fn handle_rpc(State(state): State<Arc<NodeState>>, body: String) -> Response {
    let request: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state
        .requests
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .push(request.clone());
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let envelope = match &state.reply {
        Reply::Result(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
        Reply::RpcError { code, message } => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {"code": code, "message": message}
        }),
        Reply::WrongId(result) => {
            json!({"jsonrpc": "2.0", "id": "someone-else", "result": result})
        }
        Reply::Status(status) => {
            let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return status.into_response();
        }
    };
    (
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        envelope.to_string(),
    )
        .into_response()
}

pub fn auction_result() -> Value {
    json!({
        "api_version": "1.4.5",
        "auction_state": {
            "state_root_hash": "fb9c42717769d72442ff17a5ff1574b4bc1c83aedf5992b14e4d071423f86240",
            "block_height": 42,
            "era_validators": [
                {
                    "era_id": 3,
                    "validator_weights": [
                        {
                            "public_key": "01197f6b23e16c8532c6abc838facd5ea789be0c76b2920334039bfa8b3d368d61",
                            "weight": "1000000000000000"
                        }
                    ]
                }
            ],
            "bids": []
        }
    })
}

pub fn block_result() -> Value {
    json!({
        "api_version": "1.4.5",
        "block": {
            "hash": "09dcee4b212cfd53642ab323fbef07dafafc6f945a80a00147f62910a915c4e6",
            "header": {"height": 7, "era_id": 1}
        }
    })
}

pub fn chainspec_result() -> Value {
    json!({
        "api_version": "1.4.5",
        "chainspec_bytes": {
            "chainspec_bytes": "5b70726f746f636f6c5d0a76657273696f6e203d2027312e342e3527",
            "maybe_genesis_accounts_bytes": null,
            "maybe_global_state_bytes": null
        }
    })
}

pub fn global_state_result() -> Value {
    json!({
        "api_version": "1.4.5",
        "block_header": null,
        "stored_value": {
            "CLValue": {"cl_type": "I32", "bytes": "05000000", "parsed": 5}
        },
        "merkle_proof": "01000000006ef2e0949ac76e55812421f755abe129b6244fe7168b77f47a72536147614625"
    })
}
