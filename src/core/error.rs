use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    Transport,
    Rpc,
    InvalidResponse,
    BufferTooSmall,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    rpc_code: Option<i64>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            rpc_code: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// JSON-RPC error code reported by the node, for `ErrorKind::Rpc`.
    pub fn rpc_code(&self) -> Option<i64> {
        self.rpc_code
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_rpc_code(mut self, code: i64) -> Self {
        self.rpc_code = Some(code);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Message, node code and source text without the kind prefix.
    pub fn detail(&self) -> String {
        let mut out = self.message.clone().unwrap_or_default();
        if let Some(code) = self.rpc_code {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("(rpc code: {code})"));
        }
        if let Some(source) = &self.source {
            if !out.is_empty() {
                out.push_str(": ");
            }
            out.push_str(&source.to_string());
        }
        out
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        let detail = self.detail();
        if !detail.is_empty() {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

/// Stable numeric code for an error kind; shared by the C ABI and the CLI exit status.
pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::Transport => 3,
        ErrorKind::Rpc => 4,
        ErrorKind::InvalidResponse => 5,
        ErrorKind::BufferTooSmall => 6,
    }
}
