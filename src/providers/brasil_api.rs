//! BrasilAPI address provider
//!
//! Uses the public BrasilAPI CEP endpoint, which answers in plain
//! English field names.

use super::traits::Provider;
use crate::address::NormalizedAddress;
use crate::error::{LookupError, Result};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";

/// BrasilAPI CEP provider
pub struct BrasilApi {
    base_url: String,
}

impl BrasilApi {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the adapter at a different host (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for BrasilApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw BrasilAPI payload; the response also carries a `service` field
/// naming the upstream source, which is not consumed.
#[derive(Debug, Deserialize)]
struct BrasilApiAddress {
    cep: String,
    state: String,
    city: String,
    neighborhood: String,
    street: String,
}

impl Provider for BrasilApi {
    fn name(&self) -> &str {
        "BrasilAPI"
    }

    fn url(&self, cep: &str) -> String {
        format!("{}/api/cep/v1/{}", self.base_url, cep)
    }

    fn parse(&self, body: &str) -> Result<NormalizedAddress> {
        let raw: BrasilApiAddress =
            serde_json::from_str(body).map_err(|source| LookupError::Decode {
                provider: self.name().to_string(),
                source,
            })?;

        Ok(NormalizedAddress::new(
            raw.cep,
            raw.street,
            raw.neighborhood,
            raw.city,
            raw.state,
            self.name(),
        ))
    }
}
