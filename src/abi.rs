//! Purpose: C ABI bridge over the typed node client (libcasper_client).
//! Exports: `get_auction_info`, `get_block`, `get_chainspec`, `query_global_state`,
//! `get_last_error`, `get_last_error_kind`, `clear_last_error`, `setup_client`,
//! `shutdown_client`, buffer-size constants.
//! Role: Stable foreign surface; declarations live in `headers/casper_client.h`.
//! Invariants: Boolean result + per-thread last-error slot; no error crosses as a pointer.
//! Invariants: Never writes past the caller-provided length of any buffer.
//! Invariants: Panics are caught at the boundary and reported as `Internal` failures.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::CStr;
use std::os::raw::{c_char, c_uchar};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::api::{ClientConfig, GlobalStateQuery, NodeClient};
use crate::core::buffer::{copy_truncated, copy_whole};
use crate::core::error::{Error, ErrorKind, Result, to_exit_code};
use crate::core::last_error;

pub use crate::core::buffer::MAX_RESPONSE_BUFFER_LEN;
pub use crate::core::last_error::MAX_ERROR_LEN;

static SHARED_AGENT: Mutex<Option<ureq::Agent>> = Mutex::new(None);

/// Installs a shared HTTP agent configured from the environment.
///
/// Returns `false` (with the last error set) when the environment holds an invalid
/// setting; calls then keep using a per-call agent with default settings.
#[unsafe(no_mangle)]
pub extern "C" fn setup_client() -> bool {
    boundary("setup_client", || {
        crate::logging::init_tracing();
        let config = ClientConfig::from_env()?;
        *shared_agent() = Some(config.build_agent());
        tracing::debug!(timeout_ms = config.timeout.as_millis() as u64, "client set up");
        Ok(())
    })
}

/// Drops the shared agent installed by `setup_client`.
#[unsafe(no_mangle)]
pub extern "C" fn shutdown_client() {
    *shared_agent() = None;
}

/// Get auction info.
///
/// Writes the JSON-RPC response into `response_buf` and returns `true`. On failure
/// returns `false`; `get_last_error` then yields the diagnostic. A response that does
/// not fit in `response_buf_len` bytes is rejected and the buffer is left untouched.
#[unsafe(no_mangle)]
pub extern "C" fn get_auction_info(
    maybe_rpc_id: *const c_char,
    node_address: *const c_char,
    verbose: bool,
    response_buf: *mut c_uchar,
    response_buf_len: usize,
) -> bool {
    boundary("get_auction_info", || {
        ensure_response_buf(response_buf)?;
        let maybe_rpc_id = optional_str(maybe_rpc_id, "maybe_rpc_id")?;
        let node_address = required_str(node_address, "node_address")?;
        let response =
            node_client().get_auction_info(maybe_rpc_id, node_address, verbosity(verbose))?;
        write_response(&response, response_buf, response_buf_len)
    })
}

/// Get a block by hash or height; null or empty `maybe_block_id` selects the latest block.
///
/// Same buffer and error contract as `get_auction_info`.
#[unsafe(no_mangle)]
pub extern "C" fn get_block(
    maybe_rpc_id: *const c_char,
    node_address: *const c_char,
    verbose: bool,
    maybe_block_id: *const c_char,
    response_buf: *mut c_uchar,
    response_buf_len: usize,
) -> bool {
    boundary("get_block", || {
        ensure_response_buf(response_buf)?;
        let maybe_rpc_id = optional_str(maybe_rpc_id, "maybe_rpc_id")?;
        let node_address = required_str(node_address, "node_address")?;
        let maybe_block_id = optional_str(maybe_block_id, "maybe_block_id")?;
        let response = node_client().get_block(
            maybe_rpc_id,
            node_address,
            verbosity(verbose),
            maybe_block_id,
        )?;
        write_response(&response, response_buf, response_buf_len)
    })
}

/// Get the network's chainspec files, hex-encoded.
///
/// Same buffer and error contract as `get_auction_info`.
#[unsafe(no_mangle)]
pub extern "C" fn get_chainspec(
    maybe_rpc_id: *const c_char,
    node_address: *const c_char,
    verbose: bool,
    response_buf: *mut c_uchar,
    response_buf_len: usize,
) -> bool {
    boundary("get_chainspec", || {
        ensure_response_buf(response_buf)?;
        let maybe_rpc_id = optional_str(maybe_rpc_id, "maybe_rpc_id")?;
        let node_address = required_str(node_address, "node_address")?;
        let response =
            node_client().get_chainspec(maybe_rpc_id, node_address, verbosity(verbose))?;
        write_response(&response, response_buf, response_buf_len)
    })
}

/// Query a stored value under `key`, optionally following `maybe_path` (`/`-separated).
///
/// Exactly one of `maybe_block_id` and `maybe_state_root_hash` must be non-empty.
/// Same buffer and error contract as `get_auction_info`.
#[allow(clippy::too_many_arguments)]
#[unsafe(no_mangle)]
pub extern "C" fn query_global_state(
    maybe_rpc_id: *const c_char,
    node_address: *const c_char,
    verbose: bool,
    maybe_block_id: *const c_char,
    maybe_state_root_hash: *const c_char,
    key: *const c_char,
    maybe_path: *const c_char,
    response_buf: *mut c_uchar,
    response_buf_len: usize,
) -> bool {
    boundary("query_global_state", || {
        ensure_response_buf(response_buf)?;
        let maybe_rpc_id = optional_str(maybe_rpc_id, "maybe_rpc_id")?;
        let node_address = required_str(node_address, "node_address")?;
        let query = GlobalStateQuery::parse(
            optional_str(maybe_block_id, "maybe_block_id")?,
            optional_str(maybe_state_root_hash, "maybe_state_root_hash")?,
            required_str(key, "key")?,
            optional_str(maybe_path, "maybe_path")?,
        )?;
        let response = node_client().query_global_state(
            maybe_rpc_id,
            node_address,
            verbosity(verbose),
            &query,
        )?;
        write_response(&response, response_buf, response_buf_len)
    })
}

/// Get the last error copied to the provided buffer, truncated to `len` bytes.
///
/// Returns the number of bytes written; 0 when no error is recorded on this thread.
/// No NUL terminator is added.
#[unsafe(no_mangle)]
pub extern "C" fn get_last_error(buf: *mut c_uchar, len: usize) -> usize {
    if buf.is_null() || len == 0 {
        return 0;
    }
    last_error::with_last_error(|last| match last {
        Some(last) => {
            let dest = unsafe { std::slice::from_raw_parts_mut(buf, len) };
            copy_truncated(last.message.as_bytes(), dest)
        }
        None => 0,
    })
}

/// Stable code of the last error's kind on this thread; 0 when none is recorded.
#[unsafe(no_mangle)]
pub extern "C" fn get_last_error_kind() -> i32 {
    last_error::last_error_kind().map_or(0, to_exit_code)
}

#[unsafe(no_mangle)]
pub extern "C" fn clear_last_error() {
    last_error::clear();
}

fn boundary(call: &'static str, body: impl FnOnce() -> Result<()>) -> bool {
    let outcome = panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|text| text.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(Error::new(ErrorKind::Internal).with_message(format!("{call} panicked: {detail}")))
    });
    match outcome {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(call, error = %err, "call failed");
            last_error::record(&err);
            false
        }
    }
}

fn shared_agent() -> MutexGuard<'static, Option<ureq::Agent>> {
    SHARED_AGENT
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn node_client() -> NodeClient {
    let shared = shared_agent().clone();
    match shared {
        Some(agent) => NodeClient::from_agent(agent),
        None => NodeClient::default(),
    }
}

fn verbosity(verbose: bool) -> u64 {
    u64::from(verbose)
}

fn ensure_response_buf(response_buf: *mut c_uchar) -> Result<()> {
    if response_buf.is_null() {
        return Err(Error::new(ErrorKind::Usage).with_message("response_buf is null"));
    }
    Ok(())
}

fn required_str<'a>(input: *const c_char, name: &str) -> Result<&'a str> {
    if input.is_null() {
        return Err(Error::new(ErrorKind::Usage).with_message(format!("{name} is null")));
    }
    c_str(input, name)
}

fn optional_str<'a>(input: *const c_char, name: &str) -> Result<&'a str> {
    if input.is_null() {
        return Ok("");
    }
    c_str(input, name)
}

fn c_str<'a>(input: *const c_char, name: &str) -> Result<&'a str> {
    unsafe { CStr::from_ptr(input) }.to_str().map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message(format!("{name} is not valid UTF-8"))
            .with_source(err)
    })
}

fn write_response<R: Serialize>(
    response: &R,
    response_buf: *mut c_uchar,
    response_buf_len: usize,
) -> Result<()> {
    let payload = serde_json::to_vec(response).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to serialize response")
            .with_source(err)
    })?;
    let dest = unsafe { std::slice::from_raw_parts_mut(response_buf, response_buf_len) };
    copy_whole(&payload, dest)?;
    Ok(())
}
