//! CLI Commands
//!
//! All ascon-mac CLI commands organized as separate modules.

mod check;
mod tag;

pub use check::check_mode;
pub use tag::tag_files;

use anyhow::{Context, Result};

/// Decode a hex key and validate its length.
pub fn parse_key(key_hex: &str) -> Result<ascon_mac::Key> {
    let bytes = hex::decode(key_hex.trim()).context("Key is not valid hex")?;
    let key = ascon_mac::key_from_slice(&bytes)?;
    Ok(key)
}
