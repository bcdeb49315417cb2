use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::RpcId;
use crate::core::error::{Error, ErrorKind, Result};

pub const JSONRPC_VERSION: &str = "2.0";

#[derive(Clone, Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: RpcId,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: RpcId, method: &'static str, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// A successful JSON-RPC response with a typed `result`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct JsonRpcResponse<R> {
    pub jsonrpc: String,
    pub id: RpcId,
    pub result: R,
}

#[derive(Deserialize)]
struct RawResponse {
    jsonrpc: String,
    #[serde(default)]
    id: Option<RpcId>,
    /// `Some(Value::Null)` for an explicit `"result": null`, `None` when absent.
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RawRpcError>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
struct RawRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

/// Validates a response envelope against the request id and decodes `result`.
pub fn decode_response<R>(body: &str, expected_id: &RpcId) -> Result<JsonRpcResponse<R>>
where
    R: DeserializeOwned,
{
    let raw: RawResponse = serde_json::from_str(body).map_err(|err| {
        Error::new(ErrorKind::InvalidResponse)
            .with_message("failed to parse json-rpc response")
            .with_source(err)
    })?;
    if raw.jsonrpc != JSONRPC_VERSION {
        return Err(Error::new(ErrorKind::InvalidResponse)
            .with_message(format!("unsupported jsonrpc version {:?}", raw.jsonrpc)));
    }
    match (raw.result, raw.error) {
        (None, Some(error)) => Err(rpc_error(error)),
        (Some(result), None) => {
            let id = raw.id.ok_or_else(|| {
                Error::new(ErrorKind::InvalidResponse).with_message("response is missing an id")
            })?;
            if &id != expected_id {
                return Err(Error::new(ErrorKind::InvalidResponse).with_message(format!(
                    "response id {id} does not match request id {expected_id}"
                )));
            }
            let message = if result.is_null() {
                "response result is null"
            } else {
                "unexpected result shape"
            };
            let result = serde_json::from_value(result).map_err(|err| {
                Error::new(ErrorKind::InvalidResponse)
                    .with_message(message)
                    .with_source(err)
            })?;
            Ok(JsonRpcResponse {
                jsonrpc: raw.jsonrpc,
                id,
                result,
            })
        }
        _ => Err(Error::new(ErrorKind::InvalidResponse)
            .with_message("response must contain exactly one of result or error")),
    }
}

fn rpc_error(error: RawRpcError) -> Error {
    let message = match error.data {
        Some(Value::Null) | None => format!("rpc response is error: {}", error.message),
        Some(Value::String(data)) => format!("rpc response is error: {}: {data}", error.message),
        Some(data) => format!("rpc response is error: {}: {data}", error.message),
    };
    Error::new(ErrorKind::Rpc)
        .with_message(message)
        .with_rpc_code(error.code)
}
