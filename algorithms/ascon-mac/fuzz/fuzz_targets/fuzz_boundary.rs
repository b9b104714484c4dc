#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Byte 0 picks the key length, byte 1 the output buffer length.
    let key_len = usize::from(data[0] % 33);
    let out_len = usize::from(data[1] % 33);
    let rest = &data[2..];
    if rest.len() < key_len {
        return;
    }
    let (key, message) = rest.split_at(key_len);

    let mut out = vec![0u8; out_len];
    match ascon_mac::compute_tag_into(key, message, &mut out) {
        Ok(()) => {
            assert_eq!(key_len, 16);
            assert!(out_len >= 16);
            assert_eq!(out[..16], ascon_mac::try_compute_tag(key, message).unwrap());
        }
        Err(ascon_mac::MacError::InvalidKeyLength { len }) => assert_eq!(len, key_len),
        Err(ascon_mac::MacError::BufferTooSmall { len }) => {
            assert_eq!(key_len, 16);
            assert_eq!(len, out_len);
            assert!(out.iter().all(|&b| b == 0));
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
