use url::Url;

use crate::core::error::{Error, ErrorKind, Result};

/// Sends one JSON body to a node endpoint and returns the raw response body.
pub trait Transport {
    fn post_json(&self, url: &Url, body: &str) -> Result<String>;
}

#[derive(Clone)]
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &Url, body: &str) -> Result<String> {
        let response = self
            .agent
            .post(url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json")
            .send_string(body);
        match response {
            Ok(resp) => resp.into_string().map_err(|err| {
                Error::new(ErrorKind::Transport)
                    .with_message("failed to read rpc response body")
                    .with_source(err)
            }),
            Err(ureq::Error::Status(code, _)) => Err(Error::new(ErrorKind::Transport)
                .with_message(format!("node returned http status {code}"))),
            Err(ureq::Error::Transport(err)) => Err(Error::new(ErrorKind::Transport)
                .with_message("failed to get rpc response")
                .with_source(err)),
        }
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, url: &Url, body: &str) -> Result<String> {
        (**self).post_json(url, body)
    }
}
