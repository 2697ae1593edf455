// src/core/net.rs
// Blocking HTTP GET. One request per page, no retry, no status check.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::ScrapeError;

/// Source of raw page markup. The collector only sees this trait, so tests
/// and alternative transports can stand in for the network.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `timeout = None` disables the client's request timeout entirely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScrapeError> {
        let network = |source| ScrapeError::Network { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(network)?;
        tracing::debug!(url, status = resp.status().as_u16(), "fetched");
        let body = resp.bytes().map_err(network)?;
        Ok(body.to_vec())
    }
}
