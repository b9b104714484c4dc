//! Byte/word conversion and rotation helpers.
//!
//! All multi-byte values are most-significant-byte first.

use crate::kernels::constants::{RATE, RATE_WORDS, WORD_SIZE};

/// Load 8 bytes as a big-endian word.
#[inline(always)]
pub const fn load_word(bytes: &[u8; WORD_SIZE]) -> u64 {
    u64::from_be_bytes(*bytes)
}

/// Store a word as 8 big-endian bytes.
#[inline(always)]
pub const fn store_word(word: u64) -> [u8; WORD_SIZE] {
    word.to_be_bytes()
}

/// Split one rate block into its four words.
#[inline]
pub fn load_block(block: &[u8; RATE]) -> [u64; RATE_WORDS] {
    let mut words = [0u64; RATE_WORDS];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(WORD_SIZE)) {
        let mut bytes = [0u8; WORD_SIZE];
        bytes.copy_from_slice(chunk);
        *word = load_word(&bytes);
    }
    words
}

/// 64-bit rotate right.
#[inline(always)]
pub const fn rotr(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}
