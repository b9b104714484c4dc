use ascon_mac::{compute_tag, verify, Key};
use bolero::check;

#[test]
fn fuzz_verification_logic() {
    check!()
        .with_type::<(Key, Vec<u8>)>()
        .for_each(|(key, data)| {
            // =================================================================
            // POSITIVE TEST
            // =================================================================

            let tag = compute_tag(key, data);
            assert!(verify(key, data, &tag), "verify() failed on correct data");

            // =================================================================
            // NEGATIVE TESTS (CORRUPTION)
            // =================================================================

            // 1. Data Corruption
            if !data.is_empty() {
                let mut corrupted = data.clone();
                corrupted[0] ^= 0x01;
                assert!(
                    !verify(key, &corrupted, &tag),
                    "verify() succeeded on corrupted data"
                );
            }

            // 2. Tag Corruption
            let mut bad_tag = tag;
            bad_tag[0] ^= 0xFF;
            assert!(!verify(key, data, &bad_tag), "verify() succeeded on corrupted tag");
        });
}
