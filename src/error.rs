//! Failure kinds surfaced by a lookup

use thiserror::Error;

/// Everything that can go wrong between asking for a CEP and printing
/// an address. The first three variants are produced by provider
/// adapters and carry the provider name; `Timeout` belongs to the race
/// coordinator alone.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("network error from {provider}: {source}")]
    Network {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP status {status}")]
    HttpStatus { provider: String, status: u16 },

    #[error("failed to decode {provider} response: {source}")]
    Decode {
        provider: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no provider answered within {0:?}")]
    Timeout(std::time::Duration),
}

impl LookupError {
    /// Provider the error originated from, if any.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::Network { provider, .. }
            | Self::HttpStatus { provider, .. }
            | Self::Decode { provider, .. } => Some(provider),
            Self::Timeout(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
