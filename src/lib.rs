//! Purpose: Node client library behind the `casper_client` C ABI and the CLI.
//! Exports: `abi` (C surface), `api` (typed client), `rpc` (JSON-RPC plumbing), `core`.
//! Role: `cdylib`/`staticlib` for C callers; `rlib` for the CLI and tests.
//! Invariants: Raw pointers and caller buffers exist only in `abi`.
//! Invariants: One JSON-RPC request per call; no retries or caching.
pub mod abi;
pub mod api;
pub mod core;
pub mod logging;
pub mod pretty;
pub mod rpc;
