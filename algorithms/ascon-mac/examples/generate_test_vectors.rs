//! Generator for Ascon-Mac test vectors
//!
//! Prints the current tags in the layout of `tests/test_vectors.json`: the
//! named edge cases followed by a length sweep across the 32-byte block
//! boundaries. Diff the output against the committed file; any difference is a
//! regression, never a reason to overwrite the KAT-derived vectors.
#![allow(clippy::unwrap_used)]
use serde_json::json;

fn vector(name: &str, key: &[u8; 16], input: &[u8]) -> serde_json::Value {
    json!({
        "name": name,
        "key": hex::encode(key),
        "input": hex::encode(input),
        "tag": hex::encode(ascon_mac::compute_tag(key, input))
    })
}

fn main() {
    let zero_key = [0u8; 16];
    let seq_key: [u8; 16] = core::array::from_fn(|i| i as u8);
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. NAMED EDGE CASES
    // =========================================================================

    vectors.push(vector("ZERO_KEY_EMPTY", &zero_key, b""));
    vectors.push(vector("ZERO_KEY_ZERO_BLOCK", &zero_key, &[0u8; 32]));
    vectors.push(vector("SEQ_KEY_ABC", &seq_key, b"abc"));

    // =========================================================================
    // 2. BLOCK BOUNDARIES
    // =========================================================================

    for len in [0usize, 1, 7, 8, 31, 32, 33, 63, 64, 65, 96, 100] {
        let input: Vec<u8> = (0..len).map(|i| i as u8).collect();
        vectors.push(vector(&format!("SEQ_KEY_LEN_{len}"), &seq_key, &input));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
