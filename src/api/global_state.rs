use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::block::BlockIdentifier;
use crate::core::error::{Error, ErrorKind, Result};

pub const QUERY_GLOBAL_STATE_METHOD: &str = "query_global_state";

const STATE_ROOT_HASH_HEX_LEN: usize = 64;

/// Prefixes of the formatted keys a node accepts, e.g. `account-hash-<hex>`.
const KEY_PREFIXES: &[&str] = &[
    "account-hash-",
    "hash-",
    "uref-",
    "transfer-",
    "deploy-",
    "era-",
    "balance-",
    "bid-",
    "withdraw-",
    "dictionary-",
    "system-contract-registry-",
    "unbond-",
    "chainspec-registry-",
    "checksum-registry-",
];

/// The point in history a global state query is answered from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum GlobalStateIdentifier {
    BlockHash(String),
    BlockHeight(u64),
    StateRootHash(String),
}

impl GlobalStateIdentifier {
    /// Exactly one of `maybe_block_id` and `maybe_state_root_hash` must be non-empty.
    pub fn parse(maybe_block_id: &str, maybe_state_root_hash: &str) -> Result<Self> {
        let block = BlockIdentifier::parse(maybe_block_id)?;
        let state_root_hash = maybe_state_root_hash.trim();
        match (block, state_root_hash.is_empty()) {
            (Some(_), false) => Err(Error::new(ErrorKind::Usage)
                .with_message("pass either a block identifier or a state root hash, not both")),
            (Some(BlockIdentifier::Hash(hash)), true) => Ok(Self::BlockHash(hash)),
            (Some(BlockIdentifier::Height(height)), true) => Ok(Self::BlockHeight(height)),
            (None, false) => {
                if state_root_hash.len() != STATE_ROOT_HASH_HEX_LEN
                    || !state_root_hash.bytes().all(|byte| byte.is_ascii_hexdigit())
                {
                    return Err(Error::new(ErrorKind::Usage)
                        .with_message("state root hash must be 64 hex characters"));
                }
                Ok(Self::StateRootHash(state_root_hash.to_ascii_lowercase()))
            }
            (None, true) => Err(Error::new(ErrorKind::Usage)
                .with_message("a block identifier or a state root hash is required")),
        }
    }
}

/// A `query_global_state` request: what to read and where to start.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GlobalStateQuery {
    pub state_identifier: GlobalStateIdentifier,
    /// Formatted key, e.g. `account-hash-<hex>` or `uref-<hex>-007`.
    pub key: String,
    pub path: Vec<String>,
}

impl GlobalStateQuery {
    /// `maybe_path` holds named keys separated by `/`; empty segments are ignored.
    pub fn parse(
        maybe_block_id: &str,
        maybe_state_root_hash: &str,
        key: &str,
        maybe_path: &str,
    ) -> Result<Self> {
        let state_identifier = GlobalStateIdentifier::parse(maybe_block_id, maybe_state_root_hash)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::new(ErrorKind::Usage).with_message("key is empty"));
        }
        if !KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
            return Err(Error::new(ErrorKind::Usage)
                .with_message(format!("key {key:?} is not a formatted key")));
        }
        let path = maybe_path
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Self {
            state_identifier,
            key: key.to_string(),
            path,
        })
    }

    pub(crate) fn to_params(&self) -> Value {
        json!(self)
    }
}

/// The `result` member of a `query_global_state` response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QueryGlobalStateResult {
    pub api_version: String,
    /// Present when the query was made by block hash or height.
    #[serde(default)]
    pub block_header: Option<Value>,
    pub stored_value: Value,
    pub merkle_proof: String,
}
