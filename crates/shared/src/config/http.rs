use anyhow::{Context, Result};
use std::time::Duration;

pub struct HttpClient;

impl HttpClient {
    pub fn build(timeout: Duration) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dupechecker/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")
    }
}
