//! `no_std` consumer of Ascon-Mac.
//!
//! Compiles only if `ascon-mac` builds without `std` and without an allocator.

#![no_std]

use ascon_mac::{Key, MacError, Tag};

/// Tag a message with a typed key.
pub fn tag(key: &Key, message: &[u8]) -> Tag {
    ascon_mac::compute_tag(key, message)
}

/// Tag into a caller buffer from unchecked slices.
///
/// # Errors
/// Forwards [`MacError`] from the boundary checks.
pub fn tag_into(key: &[u8], message: &[u8], out: &mut [u8]) -> Result<(), MacError> {
    ascon_mac::compute_tag_into(key, message, out)
}

/// `MacError` must stay a `core::error::Error` without `std`.
pub fn as_error(err: &MacError) -> &dyn core::error::Error {
    err
}
