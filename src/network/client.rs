//! HTTP client for making requests to address providers

use crate::providers::ProviderResponse;
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;

/// Upper bound on any single request; the race deadline is the real
/// limit, this only keeps an abandoned loser from holding a socket
/// forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client wrapper shared by all provider lookups
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        let user_agent = format!("cep-race/{}", crate::VERSION);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, user_agent })
    }

    /// Perform a GET and capture status plus body text.
    ///
    /// Non-2xx statuses are returned, not treated as errors; the
    /// provider adapter decides what a given status means.
    pub async fn get(&self, url: &str) -> reqwest::Result<ProviderResponse> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Parse response into ProviderResponse
    async fn parse_response(response: Response) -> reqwest::Result<ProviderResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(ProviderResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
