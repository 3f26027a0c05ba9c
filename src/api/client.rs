use std::time::Duration;

use anyhow::Result;
use reqwest::Client;

#[derive(Clone)]
pub struct HttpClient {
    pub client: Client,
}

impl HttpClient {
    /// Every request made through this client is aborted after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(8)
            .build()?;
        Ok(Self { client })
    }
}
