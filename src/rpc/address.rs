use url::Url;

use crate::core::error::{Error, ErrorKind, Result};

const RPC_PATH_SEGMENT: &str = "rpc";

/// Validates a node address such as `http://localhost:7777`.
pub fn normalize_node_address(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::new(ErrorKind::Usage).with_message("node address is empty"));
    }
    let mut url = Url::parse(trimmed).map_err(|err| {
        Error::new(ErrorKind::Usage)
            .with_message("invalid node address")
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("node address must use http or https scheme"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(Error::new(ErrorKind::Usage).with_message("node address must include a host"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// The JSON-RPC endpoint served by a node: its address with `/rpc` appended.
pub fn rpc_endpoint(node: &Url) -> Result<Url> {
    let mut url = node.clone();
    {
        let mut path = url.path_segments_mut().map_err(|_| {
            Error::new(ErrorKind::Usage).with_message("node address cannot be a base")
        })?;
        path.pop_if_empty();
        path.push(RPC_PATH_SEGMENT);
    }
    Ok(url)
}
