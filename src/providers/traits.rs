//! Provider traits and types

use crate::address::NormalizedAddress;
use crate::error::{LookupError, Result};
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ProviderResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// An external address-lookup service.
///
/// Each implementation owns its endpoint URL template and knows how to
/// decode its own response dialect into a [`NormalizedAddress`]. The
/// default `lookup` covers the shared GET/status/decode sequence, so an
/// adapter only supplies the parts that differ.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider name, used in logs, errors and the final report
    fn name(&self) -> &str;

    /// Build the lookup URL for a bare 8-digit CEP
    fn url(&self, cep: &str) -> String;

    /// Decode a response body into a normalized address
    fn parse(&self, body: &str) -> Result<NormalizedAddress>;

    /// Perform one lookup: a single GET, no retries.
    async fn lookup(&self, client: &HttpClient, cep: &str) -> Result<NormalizedAddress> {
        let url = self.url(cep);
        debug!("querying {} at {}", self.name(), url);

        let response = client.get(&url).await.map_err(|source| LookupError::Network {
            provider: self.name().to_string(),
            source,
        })?;

        if !response.is_success() {
            return Err(LookupError::HttpStatus {
                provider: self.name().to_string(),
                status: response.status,
            });
        }

        self.parse(&response.text)
    }
}
