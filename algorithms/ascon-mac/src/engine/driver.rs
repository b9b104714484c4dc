//! MAC Driver
//!
//! Owns the sponge state for exactly one tag computation:
//!
//! ```text
//! Init -> AbsorbFull (per 32-byte block) -> AbsorbFinal -> Squeeze -> Done
//! ```
//!
//! The state lives on the stack and is wiped when the driver is dropped.

use crate::kernels::codec::{load_block, load_word, store_word};
use crate::kernels::constants::{
    CAPACITY_WORD, DOMAIN_SEPARATION, MAC_IV, PAD_BYTE, RATE, RATE_WORDS, ROUNDS, TAG_SIZE,
    WORD_SIZE,
};
use crate::kernels::permutation::{permute, State};
use crate::types::{Key, Tag};
use zeroize::Zeroize;

// =============================================================================
// STATE & PHASES
// =============================================================================

/// Position of the driver in the sponge sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Keyed state built, initial permutation pending.
    Init,
    /// Absorbing complete rate blocks.
    AbsorbFull,
    /// Absorbing the padded, domain-separated last block.
    AbsorbFinal,
    /// Padded final block absorbed; tag ready to read.
    Squeeze,
    /// Tag emitted.
    Done,
}

/// Per-call sponge state.
pub struct MacState {
    s: State,
    phase: Phase,
    permutations: usize,
}

impl MacState {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Build `IV || K || 0^128` and apply `p^12`.
    pub fn new(key: &Key) -> Self {
        let mut k0 = [0u8; WORD_SIZE];
        let mut k1 = [0u8; WORD_SIZE];
        k0.copy_from_slice(&key[..WORD_SIZE]);
        k1.copy_from_slice(&key[WORD_SIZE..]);

        let mut state = Self {
            s: [MAC_IV, load_word(&k0), load_word(&k1), 0, 0],
            phase: Phase::Init,
            permutations: 0,
        };
        k0.zeroize();
        k1.zeroize();

        state.permute();
        state.phase = Phase::AbsorbFull;
        state
    }

    // =========================================================================
    // ABSORPTION
    // =========================================================================

    /// XOR four words into the rate. The capacity word is never touched here.
    #[inline]
    fn xor_rate(&mut self, words: &[u64; RATE_WORDS]) {
        for (lane, word) in self.s.iter_mut().zip(words) {
            *lane ^= *word;
        }
    }

    #[inline]
    fn permute(&mut self) {
        permute(&mut self.s, ROUNDS);
        self.permutations += 1;
    }

    /// Absorb one complete, non-final block.
    pub fn absorb_block(&mut self, block: &[u8; RATE]) {
        debug_assert_eq!(self.phase, Phase::AbsorbFull);
        self.xor_rate(&load_block(block));
        self.permute();
    }

    /// Pad the trailing `len mod 32` bytes, flip the separation bit, permute.
    ///
    /// `tail` must be shorter than one block. An empty tail still yields a
    /// block holding only the padding byte.
    pub fn absorb_final(&mut self, tail: &[u8]) {
        debug_assert_eq!(self.phase, Phase::AbsorbFull);
        debug_assert!(tail.len() < RATE);
        self.phase = Phase::AbsorbFinal;

        let mut buf = [0u8; RATE];
        buf[..tail.len()].copy_from_slice(tail);
        buf[tail.len()] = PAD_BYTE;

        self.xor_rate(&load_block(&buf));
        buf.zeroize();

        self.s[CAPACITY_WORD] ^= DOMAIN_SEPARATION;
        self.permute();
        self.phase = Phase::Squeeze;
    }

    /// Absorb a whole message: every full block, then the padded tail.
    pub fn absorb(&mut self, message: &[u8]) {
        let blocks = message.chunks_exact(RATE);
        let tail = blocks.remainder();
        tracing::trace!(
            len = message.len(),
            full_blocks = message.len() / RATE,
            "absorbing message"
        );

        for chunk in blocks {
            let mut block = [0u8; RATE];
            block.copy_from_slice(chunk);
            self.absorb_block(&block);
        }
        self.absorb_final(tail);
    }

    // =========================================================================
    // SQUEEZE
    // =========================================================================

    /// Read words 0 and 1 as the tag. `ro == t`, so no extra permutation.
    fn finish(&mut self) -> Tag {
        debug_assert_eq!(self.phase, Phase::Squeeze);
        let mut tag = [0u8; TAG_SIZE];
        tag[..WORD_SIZE].copy_from_slice(&store_word(self.s[0]));
        tag[WORD_SIZE..].copy_from_slice(&store_word(self.s[1]));
        tracing::trace!(permutations = self.permutations, "tag squeezed");
        self.phase = Phase::Done;
        tag
    }

    /// Emit the tag and discard the state.
    pub fn squeeze(mut self) -> Tag {
        self.finish()
    }
}

impl Drop for MacState {
    fn drop(&mut self) {
        self.s.zeroize();
    }
}

// =============================================================================
// ONE-SHOT
// =============================================================================

/// Run the whole sequence for one message.
pub fn run(key: &Key, message: &[u8]) -> Tag {
    let mut state = MacState::new(key);
    state.absorb(message);
    state.squeeze()
}
