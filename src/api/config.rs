use std::time::Duration;

use crate::core::error::{Error, ErrorKind, Result};

/// Environment variable overriding the per-request timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "CASPER_CLIENT_TIMEOUT_MS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|millis| *millis > 0)
                .ok_or_else(|| {
                    Error::new(ErrorKind::Usage).with_message(format!(
                        "{TIMEOUT_ENV} must be a positive integer, got {raw:?}"
                    ))
                })?;
            config.timeout = Duration::from_millis(millis);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build_agent(&self) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("casper-client-ffi/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
