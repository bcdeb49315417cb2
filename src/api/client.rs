use serde::de::DeserializeOwned;
use serde_json::Value;

use super::auction::{GET_AUCTION_INFO_METHOD, GetAuctionInfoResult};
use super::block::{BlockIdentifier, GET_BLOCK_METHOD, GetBlockResult};
use super::chainspec::{GET_CHAINSPEC_METHOD, GetChainspecResult};
use super::config::ClientConfig;
use super::global_state::{GlobalStateQuery, QUERY_GLOBAL_STATE_METHOD, QueryGlobalStateResult};
use crate::core::error::{Error, ErrorKind, Result};
use crate::pretty;
use crate::rpc::{
    HttpTransport, JsonRpcRequest, JsonRpcResponse, RpcId, Transport, decode_response,
    normalize_node_address, rpc_endpoint,
};

/// Issues JSON-RPC queries against a node through a [`Transport`].
#[derive(Clone)]
pub struct NodeClient<T = HttpTransport> {
    transport: T,
}

impl NodeClient<HttpTransport> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::from_agent(config.build_agent())
    }

    pub fn from_agent(agent: ureq::Agent) -> Self {
        Self::with_transport(HttpTransport::new(agent))
    }
}

impl Default for NodeClient<HttpTransport> {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl<T: Transport> NodeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Retrieves the bids and era validators as of the latest block.
    ///
    /// An empty `maybe_rpc_id` gets a random id. With `verbosity > 0` the outgoing
    /// request is printed to stdout; level 1 shortens long strings.
    pub fn get_auction_info(
        &self,
        maybe_rpc_id: &str,
        node_address: &str,
        verbosity: u64,
    ) -> Result<JsonRpcResponse<GetAuctionInfoResult>> {
        self.call(
            maybe_rpc_id,
            node_address,
            verbosity,
            GET_AUCTION_INFO_METHOD,
            None,
        )
    }

    /// Retrieves a block by hash or height; an empty `maybe_block_id` means the latest block.
    pub fn get_block(
        &self,
        maybe_rpc_id: &str,
        node_address: &str,
        verbosity: u64,
        maybe_block_id: &str,
    ) -> Result<JsonRpcResponse<GetBlockResult>> {
        let params = BlockIdentifier::parse(maybe_block_id)?.map(|id| id.to_params());
        self.call(
            maybe_rpc_id,
            node_address,
            verbosity,
            GET_BLOCK_METHOD,
            params,
        )
    }

    /// Retrieves the raw chainspec files of the network, hex-encoded.
    pub fn get_chainspec(
        &self,
        maybe_rpc_id: &str,
        node_address: &str,
        verbosity: u64,
    ) -> Result<JsonRpcResponse<GetChainspecResult>> {
        self.call(
            maybe_rpc_id,
            node_address,
            verbosity,
            GET_CHAINSPEC_METHOD,
            None,
        )
    }

    /// Reads a stored value under `query.key`, following `query.path` through named keys.
    pub fn query_global_state(
        &self,
        maybe_rpc_id: &str,
        node_address: &str,
        verbosity: u64,
        query: &GlobalStateQuery,
    ) -> Result<JsonRpcResponse<QueryGlobalStateResult>> {
        self.call(
            maybe_rpc_id,
            node_address,
            verbosity,
            QUERY_GLOBAL_STATE_METHOD,
            Some(query.to_params()),
        )
    }

    fn call<R>(
        &self,
        maybe_rpc_id: &str,
        node_address: &str,
        verbosity: u64,
        method: &'static str,
        params: Option<Value>,
    ) -> Result<JsonRpcResponse<R>>
    where
        R: DeserializeOwned,
    {
        let id = RpcId::parse(maybe_rpc_id)?;
        let node = normalize_node_address(node_address)?;
        let endpoint = rpc_endpoint(&node)?;
        let request = JsonRpcRequest::new(id, method, params);
        let request_value = serde_json::to_value(&request).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("failed to encode request json")
                .with_source(err)
        })?;
        pretty::print_at_level(&request_value, verbosity);

        tracing::debug!(%endpoint, method, id = %request.id, "sending rpc request");
        let body = self
            .transport
            .post_json(&endpoint, &request_value.to_string())?;
        let response = decode_response(&body, &request.id)?;
        tracing::debug!(method, id = %request.id, bytes = body.len(), "received rpc response");
        Ok(response)
    }
}
