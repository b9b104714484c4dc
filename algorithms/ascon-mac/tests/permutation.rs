//! Permutation Tests
//!
//! Reduced-round vectors for `p^r` on its own, plus an Ascon-Hash rebuild
//! as an independent check of the round function and byte order.

#![allow(clippy::pedantic, clippy::nursery)]

use ascon_mac::kernels::codec::{load_word, rotr, store_word};
use ascon_mac::kernels::constants::{ROUNDS, ROUND_CONSTANTS};
use ascon_mac::kernels::permutation::{permute, permute_12, round, State};

// =============================================================================
// REDUCED-ROUND VECTORS
// =============================================================================

#[test]
fn test_p12_zero_state() {
    let mut s: State = [0; 5];
    permute(&mut s, 12);
    assert_eq!(
        s,
        [
            0x78ea_7ae5_cfeb_b108,
            0x9b9b_fb85_13b5_60f7,
            0x6937_f83e_03d1_1a50,
            0x3fe5_3f36_f2c1_178c,
            0x045d_648e_4def_12c9,
        ]
    );
}

#[test]
fn test_p8_zero_state() {
    let mut s: State = [0; 5];
    permute(&mut s, 8);
    assert_eq!(
        s,
        [
            0x1418_f8af_721a_a830,
            0xa542_5f1f_8cb3_1388,
            0xa01e_f761_bf8e_1652,
            0xf01f_dabf_8c8a_82b4,
            0x0168_260b_adf7_6a06,
        ]
    );
}

#[test]
fn test_p6_zero_state() {
    let mut s: State = [0; 5];
    permute(&mut s, 6);
    assert_eq!(
        s,
        [
            0x160c_84f2_0faa_d4f1,
            0x2149_5b1b_0ae3_3eef,
            0xe037_7d04_e23a_914b,
            0x2b23_4815_98ff_a8ea,
            0x649a_f379_ba83_cd30,
        ]
    );
}

#[test]
fn test_p12_counting_state() {
    let mut s: State = [0, 1, 2, 3, 4];
    permute_12(&mut s);
    assert_eq!(
        s,
        [
            0x5b1a_32e0_4064_6cc6,
            0x7a65_613d_a39b_3e2e,
            0x7211_67c8_91f6_6c2f,
            0x32c8_5b9b_604c_ad70,
            0xf384_fd3c_21f6_c615,
        ]
    );
}

#[test]
fn test_fewer_rounds_are_a_suffix() {
    // p^12 == (first 12 - r rounds) followed by p^r
    for r in 1..ROUNDS {
        let mut full: State = [0x0123_4567_89ab_cdef, 1, 2, 3, 4];
        let mut split = full;
        permute_12(&mut full);

        for &c in &ROUND_CONSTANTS[..ROUNDS - r] {
            round(&mut split, c);
        }
        permute(&mut split, r);
        assert_eq!(split, full, "split at r={r}");
    }
}

// =============================================================================
// ASCON-HASH CROSS-CHECK
// =============================================================================

/// Ascon-Hash v1.2 built from the public permutation (rate 8, IV `0x00400c0000000100`).
fn ascon_hash(message: &[u8]) -> [u8; 32] {
    let mut s: State = [0x0040_0c00_0000_0100, 0, 0, 0, 0];
    permute_12(&mut s);

    let mut padded = message.to_vec();
    padded.push(0x80);
    while padded.len() % 8 != 0 {
        padded.push(0);
    }
    let blocks: Vec<[u8; 8]> = padded
        .chunks_exact(8)
        .map(|c| {
            let mut b = [0u8; 8];
            b.copy_from_slice(c);
            b
        })
        .collect();
    for block in &blocks[..blocks.len() - 1] {
        s[0] ^= load_word(block);
        permute_12(&mut s);
    }
    s[0] ^= load_word(&blocks[blocks.len() - 1]);
    permute_12(&mut s);

    let mut out = [0u8; 32];
    for chunk in out.chunks_exact_mut(8) {
        chunk.copy_from_slice(&store_word(s[0]));
        permute_12(&mut s);
    }
    out
}

#[test]
fn test_ascon_hash_empty_digest() {
    assert_eq!(
        hex::encode(ascon_hash(b"")),
        "7346bc14f036e87ae03d0997913088f5f68411434b3cf8b54fa796a80d251f91"
    );
}

#[test]
fn test_ascon_hash_precomputed_iv_state() {
    let mut s: State = [0x0040_0c00_0000_0100, 0, 0, 0, 0];
    permute_12(&mut s);
    assert_eq!(
        s,
        [
            0xee93_98aa_db67_f03d,
            0x8bb2_1831_c60f_1002,
            0xb48a_92db_98d5_da62,
            0x4318_9921_b8f8_e3e8,
            0x348f_a5c9_d525_e140,
        ]
    );
}

// =============================================================================
// ROTATION
// =============================================================================

#[test]
fn test_rotation_roundtrip_all_amounts() {
    let mut x = 0xDEAD_BEEF_CAFE_BABE_u64;
    for _ in 0..64 {
        for n in 1..64 {
            assert_eq!(rotr(rotr(x, n), 64 - n), x);
        }
        x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    }
}
