//! Shared types used across the Ascon-Mac library.

use crate::kernels::constants::{KEY_SIZE, TAG_SIZE};

// =============================================================================
// BOUNDARY TYPES
// =============================================================================

/// 128-bit secret key.
pub type Key = [u8; KEY_SIZE];

/// 128-bit authentication tag.
pub type Tag = [u8; TAG_SIZE];

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Precondition violations rejected before any state is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MacError {
    /// The key is not exactly 16 bytes.
    #[error("invalid key length: expected {expected} bytes, got {len}", expected = KEY_SIZE)]
    InvalidKeyLength {
        /// Length that was supplied.
        len: usize,
    },
    /// The output buffer cannot hold a 16-byte tag.
    #[error("output buffer too small: need {needed} bytes, got {len}", needed = TAG_SIZE)]
    BufferTooSmall {
        /// Length that was supplied.
        len: usize,
    },
}

impl MacError {
    /// Stable numeric code used by the C ABI.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::InvalidKeyLength { .. } => -3,
            Self::BufferTooSmall { .. } => -4,
        }
    }
}

/// Validate a key slice and copy it into a fixed-size key.
///
/// # Errors
/// Returns [`MacError::InvalidKeyLength`] unless `key.len() == 16`.
pub fn key_from_slice(key: &[u8]) -> Result<Key, MacError> {
    Key::try_from(key).map_err(|_| MacError::InvalidKeyLength { len: key.len() })
}
