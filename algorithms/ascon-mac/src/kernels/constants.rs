//! Ascon-Mac Kernel Constants
//!
//! Parameters of the Ascon-Mac instance:
//!
//! ```text
//! k = 128   key bits
//! ri = 256  input rate (4 words absorbed per block)
//! ro = 128  output rate (2 words squeezed)
//! t = 128   tag bits
//! a = 12    rounds of p per call
//! ```

// =============================================================================
// ROUNDS
// =============================================================================

/// Rounds of the full permutation; every call in the MAC uses this count.
pub const ROUNDS: usize = 12;

/// Round constants `c_i`, XORed into word 2 in round `i`.
///
/// A call with `r` rounds uses the tail `ROUND_CONSTANTS[12 - r..]`.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_00f0,
    0x0000_0000_0000_00e1,
    0x0000_0000_0000_00d2,
    0x0000_0000_0000_00c3,
    0x0000_0000_0000_00b4,
    0x0000_0000_0000_00a5,
    0x0000_0000_0000_0096,
    0x0000_0000_0000_0087,
    0x0000_0000_0000_0078,
    0x0000_0000_0000_0069,
    0x0000_0000_0000_005a,
    0x0000_0000_0000_004b,
];

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Words in the 320-bit state.
pub const STATE_WORDS: usize = 5;

/// Bytes per 64-bit word.
pub const WORD_SIZE: usize = 8;

/// Rate words (0..=3); word 4 is the capacity.
pub const RATE_WORDS: usize = 4;

/// Bytes absorbed per block.
pub const RATE: usize = RATE_WORDS * WORD_SIZE;

/// Index of the capacity word.
pub const CAPACITY_WORD: usize = 4;

/// Key size in bytes (128-bit key).
pub const KEY_SIZE: usize = 16;

/// Tag size in bytes (128-bit tag).
pub const TAG_SIZE: usize = 16;

// =============================================================================
// INITIALIZATION & PADDING
// =============================================================================

/// Ascon-Mac IV: `k || ro || (0x80 | a) || 0x00 || t` packed big-endian.
pub const MAC_IV: u64 = 0x8080_8C00_0000_0080;

/// First padding byte written after the message tail (`1 || 0*`).
pub const PAD_BYTE: u8 = 0x80;

/// Bit XORed into the capacity word before the final permutation.
pub const DOMAIN_SEPARATION: u64 = 1;
