use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::error::{Error, ErrorKind, Result};

pub const GET_BLOCK_METHOD: &str = "chain_get_block";

const BLOCK_HASH_HEX_LEN: usize = 64;

/// Selects a block by hash or by height.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum BlockIdentifier {
    /// Lowercase hex of a 32-byte block hash.
    Hash(String),
    Height(u64),
}

impl BlockIdentifier {
    /// Empty input means "the latest block" and yields `None`.
    pub fn parse(raw: &str) -> Result<Option<Self>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        if raw.len() == BLOCK_HASH_HEX_LEN {
            if !raw.bytes().all(|byte| byte.is_ascii_hexdigit()) {
                return Err(Error::new(ErrorKind::Usage)
                    .with_message("block hash must be hex-encoded"));
            }
            return Ok(Some(BlockIdentifier::Hash(raw.to_ascii_lowercase())));
        }
        raw.parse::<u64>()
            .map(|height| Some(BlockIdentifier::Height(height)))
            .map_err(|err| {
                Error::new(ErrorKind::Usage)
                    .with_message("block identifier must be a 64-character hex hash or a height")
                    .with_source(err)
            })
    }

    pub(crate) fn to_params(&self) -> Value {
        json!({ "block_identifier": self })
    }
}

/// The `result` member of a `chain_get_block` response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GetBlockResult {
    pub api_version: String,
    #[serde(default)]
    pub block: Option<Value>,
}
