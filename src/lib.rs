//! CEP-Race: a concurrent Brazilian postal code lookup client
//!
//! Queries every known address provider for the same CEP at once and
//! keeps whichever answer arrives first, dropping the rest.

pub mod address;
pub mod config;
pub mod error;
pub mod network;
pub mod providers;
pub mod race;

pub use address::NormalizedAddress;
pub use config::Cli;
pub use error::LookupError;
pub use network::HttpClient;
pub use providers::Provider;
pub use race::{RaceOutcome, Racer};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default race deadline in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
