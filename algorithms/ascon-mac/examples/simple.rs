//! Ascon-Mac Basic Example
//!
//! Minimal usage: `let tag = ascon_mac::compute_tag(&key, &data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let key = *b"YELLOW SUBMARINE";
    let data = b"Hello, World!";
    let tag = ascon_mac::compute_tag(&key, data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Tag:  {}", hex::encode(tag));
    println!("Valid: {}", ascon_mac::verify(&key, data, &tag));
}
