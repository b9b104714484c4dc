//! # `PractRand` Stream Generator
//!
//! Writes an endless stream of Ascon-Mac tags to stdout, one per value of an
//! incrementing 64-bit counter, under a fixed key.

use anyhow::{Context, Result};
use std::io::{self, ErrorKind, Write};

/// Fixed stream key (`0x00..=0x0f`).
const KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];

/// Message size for a given counter value.
fn message_size(mode: &str, counter: u64) -> Result<usize> {
    match mode {
        // Cycle through 16, 32, 64, 128 bytes
        "cyclic" => Ok(16 << (counter % 4)),
        s => s
            .parse::<usize>()
            .with_context(|| format!("Invalid size: {s}")),
    }
}

/// Entry point for the `PractRand` stream generator.
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Default to one 32-byte block if no argument is provided
    let mode = args.get(1).map_or("32", String::as_str);
    message_size(mode, 0)?;

    let mut counter: u64 = 0;
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    loop {
        let size = message_size(mode, counter)?;
        let counter_bytes = counter.to_be_bytes();

        // Fill input with the counter (repeatedly if needed)
        let input: Vec<u8> = (0..size).map(|i| counter_bytes[i % 8]).collect();
        let tag = ascon_mac::compute_tag(&KEY, &input);

        match handle.write_all(&tag) {
            Ok(()) => {}
            // Reader closed the pipe
            Err(e) if e.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(e) => return Err(e).context("Failed to write stream"),
        }

        counter = counter.wrapping_add(1);
    }
}
