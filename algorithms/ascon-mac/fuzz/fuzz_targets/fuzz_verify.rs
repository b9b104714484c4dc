#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First 16 bytes are the key, the rest is the message.
    if data.len() < 16 {
        return;
    }
    let (key_bytes, message) = data.split_at(16);
    let mut key = [0u8; 16];
    key.copy_from_slice(key_bytes);

    let tag = ascon_mac::compute_tag(&key, message);
    assert!(ascon_mac::verify(&key, message, &tag));

    // Any single flipped tag bit must be rejected
    let bit = usize::from(data[0]) % 128;
    let mut forged = tag;
    forged[bit / 8] ^= 1 << (bit % 8);
    assert!(!ascon_mac::verify(&key, message, &forged));
});
