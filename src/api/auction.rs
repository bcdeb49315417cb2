use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const GET_AUCTION_INFO_METHOD: &str = "state_get_auction_info";

/// The `result` member of a `state_get_auction_info` response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GetAuctionInfoResult {
    pub api_version: String,
    pub auction_state: AuctionState,
}

/// Bids and era validators as of the block the node answered from.
///
/// Validator and bid entries are passed through untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuctionState {
    pub state_root_hash: String,
    pub block_height: u64,
    pub era_validators: Vec<Value>,
    pub bids: Vec<Value>,
}
