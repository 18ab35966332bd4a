//! Address provider module
//!
//! Defines the Provider trait and one adapter per lookup service.

mod traits;

// Provider implementations
pub mod brasil_api;
pub mod via_cep;

pub use brasil_api::BrasilApi;
pub use traits::{Provider, ProviderResponse};
pub use via_cep::ViaCep;

use std::sync::Arc;

/// The closed set of providers raced for every lookup, fixed at startup
pub fn all() -> Vec<Arc<dyn Provider>> {
    vec![Arc::new(BrasilApi::new()), Arc::new(ViaCep::new())]
}
