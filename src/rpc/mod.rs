//! Purpose: JSON-RPC 2.0 plumbing between the typed client and a node.
//! Exports: `RpcId`, request/response envelopes, node-address helpers, `Transport`.
//! Role: Wire-level layer; knows envelopes and endpoints, not individual methods.
//! Invariants: Exactly one POST per call; no retries or caching at this layer.
mod address;
mod envelope;
mod id;
mod transport;

pub use address::{normalize_node_address, rpc_endpoint};
pub use envelope::{JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse, decode_response};
pub use id::RpcId;
pub use transport::{HttpTransport, Transport};
