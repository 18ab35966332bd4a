//! The normalized address record
//!
//! Every provider speaks its own JSON dialect; this is the one shape
//! they are all mapped into before anything else sees them.

use serde::{Deserialize, Serialize};

/// A postal address, normalized across providers.
///
/// Created once per successful provider response and never mutated
/// afterwards; `source` records which provider produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedAddress {
    /// The 8-digit postal code the providers echoed back
    pub cep: String,
    /// Street name (logradouro)
    pub street: String,
    /// District/neighborhood (bairro)
    pub district: String,
    /// City name
    pub city: String,
    /// Two-letter state code
    pub state: String,
    /// Name of the provider that answered
    pub source: String,
}

impl NormalizedAddress {
    pub fn new(
        cep: impl Into<String>,
        street: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            cep: cep.into(),
            street: street.into(),
            district: district.into(),
            city: city.into(),
            state: state.into(),
            source: source.into(),
        }
    }
}

impl std::fmt::Display for NormalizedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Provider: {}", self.source)?;
        writeln!(f, "CEP:      {}", self.cep)?;
        writeln!(f, "Street:   {}", self.street)?;
        writeln!(f, "District: {}", self.district)?;
        writeln!(f, "City:     {}", self.city)?;
        write!(f, "State:    {}", self.state)
    }
}
