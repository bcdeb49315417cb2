use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind, Result};

/// JSON-RPC request identifier; numeric when the caller's text is an integer.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    String(String),
}

impl RpcId {
    /// Parses a caller-supplied id; empty input gets a random numeric id.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Self::random();
        }
        Ok(raw
            .parse::<i64>()
            .map(RpcId::Number)
            .unwrap_or_else(|_| RpcId::String(raw.to_string())))
    }

    pub fn random() -> Result<Self> {
        let mut bytes = [0u8; 8];
        getrandom::fill(&mut bytes).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message(format!("failed to generate rpc id: {err}"))
        })?;
        // Keep generated ids non-negative so they read naturally in logs.
        Ok(RpcId::Number((u64::from_le_bytes(bytes) >> 1) as i64))
    }
}

impl fmt::Display for RpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcId::Number(number) => write!(f, "{number}"),
            RpcId::String(text) => write!(f, "{text:?}"),
        }
    }
}
