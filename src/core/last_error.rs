//! Purpose: Per-thread "last error" slot read by the C ABI after a failed call.
//! Exports: `MAX_ERROR_LEN`, `record`, `with_last_error`, `last_error_kind`, `clear`.
//! Role: Side channel for diagnostics; the boolean return carries success/failure.
//! Invariants: Stored text is valid UTF-8 and never longer than `MAX_ERROR_LEN` bytes.
//! Invariants: Only `record` and `clear` mutate the slot; successful calls leave it alone.
use std::cell::RefCell;

use super::error::{Error, ErrorKind};

/// Maximum length of error-string output in bytes.
pub const MAX_ERROR_LEN: usize = 255;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LastError {
    pub kind: ErrorKind,
    pub message: String,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

pub fn record(err: &Error) {
    let detail = err.detail();
    let message = if detail.is_empty() {
        format!("{:?}", err.kind())
    } else {
        detail
    };
    let message = truncate_at_char_boundary(&message, MAX_ERROR_LEN).to_string();
    LAST_ERROR.with(|slot| {
        *slot.borrow_mut() = Some(LastError {
            kind: err.kind(),
            message,
        });
    });
}

pub fn with_last_error<R>(f: impl FnOnce(Option<&LastError>) -> R) -> R {
    LAST_ERROR.with(|slot| f(slot.borrow().as_ref()))
}

pub fn last_error_kind() -> Option<ErrorKind> {
    with_last_error(|last| last.map(|last| last.kind))
}

pub fn clear() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

pub(crate) fn truncate_at_char_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
