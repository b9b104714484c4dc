use ascon_mac::{compute_tag, compute_tag_into, try_compute_tag, MacError, TAG_SIZE};
use bolero::check;

#[test]
fn fuzz_slice_api_consistency() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>, u8)>()
        .for_each(|(key, data, out_len)| {
            let out_len = usize::from(*out_len % 40);
            let mut out = vec![0x5Au8; out_len];
            let result = compute_tag_into(key, data, &mut out);

            match <[u8; 16]>::try_from(key.as_slice()) {
                Ok(typed) => {
                    let expected = compute_tag(&typed, data);
                    assert_eq!(try_compute_tag(key, data), Ok(expected));
                    if out_len >= TAG_SIZE {
                        assert_eq!(result, Ok(()));
                        assert_eq!(out[..TAG_SIZE], expected);
                    } else {
                        assert_eq!(result, Err(MacError::BufferTooSmall { len: out_len }));
                        assert!(out.iter().all(|&b| b == 0x5A));
                    }
                }
                Err(_) => {
                    let err = MacError::InvalidKeyLength { len: key.len() };
                    assert_eq!(result, Err(err));
                    assert_eq!(try_compute_tag(key, data), Err(err));
                    assert!(out.iter().all(|&b| b == 0x5A));
                }
            }
        });
}
