//! ViaCEP address provider
//!
//! Uses the public ViaCEP webservice, which answers in Portuguese
//! field names.

use super::traits::Provider;
use crate::address::NormalizedAddress;
use crate::error::{LookupError, Result};
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "http://viacep.com.br";

/// ViaCEP provider
pub struct ViaCep {
    base_url: String,
}

impl ViaCep {
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

impl Default for ViaCep {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw ViaCEP payload. The service also returns complemento, unidade,
/// estado, regiao, ibge, gia, ddd and siafi; only the fields mapped
/// below are declared. An unknown CEP yields `{"erro": true}`, which
/// fails decoding here and surfaces as a provider error.
#[derive(Debug, Deserialize)]
struct ViaCepAddress {
    cep: String,
    logradouro: String,
    bairro: String,
    localidade: String,
    uf: String,
}

impl Provider for ViaCep {
    fn name(&self) -> &str {
        "ViaCEP"
    }

    fn url(&self, cep: &str) -> String {
        format!("{}/ws/{}/json/", self.base_url, cep)
    }

    fn parse(&self, body: &str) -> Result<NormalizedAddress> {
        let raw: ViaCepAddress =
            serde_json::from_str(body).map_err(|source| LookupError::Decode {
                provider: self.name().to_string(),
                source,
            })?;

        Ok(NormalizedAddress::new(
            raw.cep,
            raw.logradouro,
            raw.bairro,
            raw.localidade,
            raw.uf,
            self.name(),
        ))
    }
}
