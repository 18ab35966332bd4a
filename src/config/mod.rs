//! Command-line configuration

use anyhow::bail;
use clap::Parser;

/// Race every known CEP provider and print the fastest answer
#[derive(Debug, Parser)]
#[command(name = "cep-race", version, about)]
pub struct Cli {
    /// Postal code to look up: 8 digits, with or without the hyphen
    /// (68904360 or 68904-360)
    pub cep: String,

    /// Overall race deadline in milliseconds
    #[arg(long, default_value_t = crate::DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validate a CEP and strip the optional hyphen; providers always get
/// the bare 8 digits.
pub fn normalize_cep(input: &str) -> anyhow::Result<String> {
    let trimmed = input.trim();
    let plain = trimmed.len() == 8;
    let hyphenated = trimmed.len() == 9 && trimmed.as_bytes().get(5) == Some(&b'-');

    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 8 && (plain || hyphenated) {
        Ok(digits)
    } else {
        bail!("invalid CEP {:?}: expected 8 digits, e.g. 68904360 or 68904-360", input);
    }
}
