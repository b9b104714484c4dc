use ascon_mac::{compute_tag, Key};
use bolero::check;

#[test]
fn fuzz_key_sensitivity() {
    check!()
        .with_type::<(Key, Key, Vec<u8>)>()
        .for_each(|(k1, k2, data)| {
            if k1 != k2 {
                assert_ne!(compute_tag(k1, data), compute_tag(k2, data));
            } else {
                assert_eq!(compute_tag(k1, data), compute_tag(k2, data));
            }
        });
}

#[test]
fn fuzz_length_extension_changes_tag() {
    check!()
        .with_type::<(Key, Vec<u8>, u8)>()
        .for_each(|(key, data, extra)| {
            let mut extended = data.clone();
            extended.push(*extra);
            assert_ne!(compute_tag(key, data), compute_tag(key, &extended));
        });
}
