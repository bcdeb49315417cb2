//! Purpose: Bounded copies into caller-owned byte regions.
//! Exports: `MAX_RESPONSE_BUFFER_LEN`, `copy_whole`, `copy_truncated`.
//! Role: The only place payload sizes are checked against caller capacity.
//! Invariants: No helper ever writes past `dest.len()`.
//! Invariants: Responses are all-or-nothing; diagnostics may be cut short.
use super::error::{Error, ErrorKind, Result};

/// Maximum length of provided `response_buf` buffer.
pub const MAX_RESPONSE_BUFFER_LEN: usize = 1024;

/// Copies `payload` into `dest` or fails without touching it.
///
/// A NUL byte follows the payload when `dest` has room for one, so C callers can
/// print a zero-initialised buffer with `%s`.
pub fn copy_whole(payload: &[u8], dest: &mut [u8]) -> Result<usize> {
    if payload.len() > dest.len() {
        return Err(Error::new(ErrorKind::BufferTooSmall).with_message(format!(
            "response needs {} bytes but buffer holds {}",
            payload.len(),
            dest.len()
        )));
    }
    dest[..payload.len()].copy_from_slice(payload);
    if let Some(terminator) = dest.get_mut(payload.len()) {
        *terminator = 0;
    }
    Ok(payload.len())
}

pub fn copy_truncated(src: &[u8], dest: &mut [u8]) -> usize {
    let len = src.len().min(dest.len());
    dest[..len].copy_from_slice(&src[..len]);
    len
}
