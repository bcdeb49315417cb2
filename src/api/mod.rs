//! Purpose: Typed Rust API for querying a node; the C ABI is a thin layer over it.
//! Exports: `NodeClient`, `ClientConfig`, and the typed params/results of each query.
//! Role: Owned results returned by value; no caller-managed buffers at this level.
//! Invariants: Each operation issues exactly one JSON-RPC request.
mod auction;
mod block;
mod chainspec;
mod client;
mod config;
mod global_state;

pub use crate::core::error::{Error, ErrorKind, Result, to_exit_code};
pub use crate::rpc::{JsonRpcResponse, RpcId};
pub use auction::{AuctionState, GET_AUCTION_INFO_METHOD, GetAuctionInfoResult};
pub use block::{BlockIdentifier, GET_BLOCK_METHOD, GetBlockResult};
pub use chainspec::{ChainspecRawBytes, GET_CHAINSPEC_METHOD, GetChainspecResult};
pub use client::NodeClient;
pub use config::{ClientConfig, DEFAULT_TIMEOUT, TIMEOUT_ENV};
pub use global_state::{
    GlobalStateIdentifier, GlobalStateQuery, QUERY_GLOBAL_STATE_METHOD, QueryGlobalStateResult,
};
