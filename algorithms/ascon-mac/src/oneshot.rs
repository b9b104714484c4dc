//! Public API Layer
//!
use crate::engine::driver;
use crate::kernels::constants::TAG_SIZE;
use crate::types::{key_from_slice, Key, MacError, Tag};
use subtle::ConstantTimeEq;

// =============================================================================
// TAG COMPUTATION
// =============================================================================

/// Compute the Ascon-Mac tag of `message` under `key`.
///
/// # Example
/// ```rust
/// let key = [0u8; 16];
/// let tag = ascon_mac::compute_tag(&key, b"message");
/// assert_eq!(tag.len(), 16);
/// ```
#[must_use]
#[inline]
pub fn compute_tag(key: &Key, message: &[u8]) -> Tag {
    driver::run(key, message)
}

/// Compute a tag from an unchecked key slice.
///
/// # Errors
/// [`MacError::InvalidKeyLength`] if `key` is not 16 bytes. Nothing is
/// computed in that case.
///
/// # Example
/// ```rust
/// use ascon_mac::{try_compute_tag, MacError};
///
/// assert!(try_compute_tag(&[7u8; 16], b"abc").is_ok());
/// assert_eq!(
///     try_compute_tag(&[7u8; 15], b"abc"),
///     Err(MacError::InvalidKeyLength { len: 15 })
/// );
/// ```
pub fn try_compute_tag(key: &[u8], message: &[u8]) -> Result<Tag, MacError> {
    let key = key_from_slice(key)?;
    Ok(compute_tag(&key, message))
}

/// Compute a tag into a caller-provided buffer.
///
/// Writes `out[..16]`; bytes past the tag are left untouched.
///
/// # Errors
/// [`MacError::InvalidKeyLength`] or [`MacError::BufferTooSmall`], checked in
/// that order before `out` is modified.
pub fn compute_tag_into(key: &[u8], message: &[u8], out: &mut [u8]) -> Result<(), MacError> {
    let key = key_from_slice(key)?;
    let Some(dst) = out.get_mut(..TAG_SIZE) else {
        return Err(MacError::BufferTooSmall { len: out.len() });
    };
    dst.copy_from_slice(&compute_tag(&key, message));
    Ok(())
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the tag and compare it to `expected` in constant time.
///
/// # Example
/// ```rust
/// let key = [42u8; 16];
/// let tag = ascon_mac::compute_tag(&key, b"message");
/// assert!(ascon_mac::verify(&key, b"message", &tag));
/// assert!(!ascon_mac::verify(&key, b"messagf", &tag));
/// ```
#[must_use]
pub fn verify(key: &Key, message: &[u8], expected: &Tag) -> bool {
    let computed = compute_tag(key, message);
    computed.ct_eq(expected).into()
}
