use serde::{Deserialize, Serialize};

pub const GET_CHAINSPEC_METHOD: &str = "info_get_chainspec";

/// The `result` member of an `info_get_chainspec` response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GetChainspecResult {
    pub api_version: String,
    pub chainspec_bytes: ChainspecRawBytes,
}

/// Hex-encoded raw files the network was launched with.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChainspecRawBytes {
    /// `chainspec.toml`.
    pub chainspec_bytes: String,
    /// `accounts.toml`, when the network has one.
    #[serde(default)]
    pub maybe_genesis_accounts_bytes: Option<String>,
    /// `global_state.toml`, when the network has one.
    #[serde(default)]
    pub maybe_global_state_bytes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::GetChainspecResult;
    use serde_json::json;

    #[test]
    fn optional_files_may_be_absent() {
        let value = json!({
            "api_version": "1.4.5",
            "chainspec_bytes": {"chainspec_bytes": "5b70726f746f636f6c5d"}
        });
        let result: GetChainspecResult = serde_json::from_value(value).expect("decode");
        assert_eq!(result.chainspec_bytes.chainspec_bytes, "5b70726f746f636f6c5d");
        assert_eq!(result.chainspec_bytes.maybe_genesis_accounts_bytes, None);
        assert_eq!(result.chainspec_bytes.maybe_global_state_bytes, None);
    }

    #[test]
    fn missing_chainspec_bytes_is_rejected() {
        let value = json!({"api_version": "1.4.5", "chainspec_bytes": {}});
        assert!(serde_json::from_value::<GetChainspecResult>(value).is_err());
    }
}
