//! HTTP networking module
//!
//! Provides HTTP client functionality for talking to address providers.

mod client;

pub use client::HttpClient;
