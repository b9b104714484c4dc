#![cfg_attr(not(feature = "std"), no_std)]

//! # Ascon-Mac
//!
//! 128-bit message authentication tags from a sponge over the Ascon
//! permutation `p^12`. Authentication only: no encryption, no nonce, no
//! associated data.

//! # Usage
//! ```rust
//! let key = [0x42u8; 16];
//!
//! // 1. Tagging
//! let tag = ascon_mac::compute_tag(&key, b"Authenticate me");
//!
//! // 2. Constant-time verification
//! assert!(ascon_mac::verify(&key, b"Authenticate me", &tag));
//!
//! // 3. Unchecked key material at a boundary
//! let tag2 = ascon_mac::try_compute_tag(&key[..], b"Authenticate me")?;
//! assert_eq!(tag, tag2);
//! # Ok::<(), ascon_mac::MacError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
// Permutation and codec are public for tests, benches and reduced-round use, but hidden from docs
#[doc(hidden)]
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{KEY_SIZE, TAG_SIZE};
pub use oneshot::{compute_tag, compute_tag_into, try_compute_tag, verify};
pub use types::{key_from_slice, Key, MacError, Tag};
