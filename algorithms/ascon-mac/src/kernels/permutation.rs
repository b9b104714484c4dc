//! Ascon permutation `p^r` over a five-word state.
//!
//! Each round is `p_L ∘ p_S ∘ p_C`: constant addition, the bit-sliced
//! 5-bit S-box, then the per-word linear diffusion.

use crate::kernels::codec::rotr;
use crate::kernels::constants::{ROUNDS, ROUND_CONSTANTS, STATE_WORDS};

/// 320-bit permutation state: rate words 0..=3, capacity word 4.
pub type State = [u64; STATE_WORDS];

// =============================================================================
// ROUND STEPS
// =============================================================================

/// `p_C`: add the round constant to word 2.
#[inline(always)]
pub const fn add_constant(s: &mut State, constant: u64) {
    s[2] ^= constant;
}

/// `p_S`: 64 parallel copies of the 5-bit S-box, bit-sliced across the words.
#[inline(always)]
pub const fn substitute(s: &mut State) {
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];

    let t0 = !s[0] & s[1];
    let t1 = !s[1] & s[2];
    let t2 = !s[2] & s[3];
    let t3 = !s[3] & s[4];
    let t4 = !s[4] & s[0];

    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;

    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];
}

/// `p_L`: `x_i ^= (x_i >>> a_i) ^ (x_i >>> b_i)` with fixed per-word amounts.
#[inline(always)]
pub const fn diffuse(s: &mut State) {
    s[0] ^= rotr(s[0], 19) ^ rotr(s[0], 28);
    s[1] ^= rotr(s[1], 61) ^ rotr(s[1], 39);
    s[2] ^= rotr(s[2], 1) ^ rotr(s[2], 6);
    s[3] ^= rotr(s[3], 10) ^ rotr(s[3], 17);
    s[4] ^= rotr(s[4], 7) ^ rotr(s[4], 41);
}

/// One full round with the given constant.
#[inline(always)]
pub const fn round(s: &mut State, constant: u64) {
    add_constant(s, constant);
    substitute(s);
    diffuse(s);
}

// =============================================================================
// PERMUTATION
// =============================================================================

/// Apply the last `rounds` rounds of the 12-round schedule.
///
/// `rounds` must lie in `1..=12`. Debug builds assert this. Release builds
/// clamp counts above 12 to 12 and run no rounds at all for `0`, so the
/// constant table is never indexed out of range.
#[inline]
pub fn permute(s: &mut State, rounds: usize) {
    debug_assert!(
        (1..=ROUNDS).contains(&rounds),
        "round count {rounds} outside 1..={ROUNDS}"
    );
    let start = ROUNDS - rounds.min(ROUNDS);
    for &constant in &ROUND_CONSTANTS[start..] {
        round(s, constant);
    }
}

/// Full-strength `p^12`.
#[inline]
pub fn permute_12(s: &mut State) {
    permute(s, ROUNDS);
}
