//! Check Command
//!
//! Verify tags from a list file (like sha256sum -c).

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of checking one `tag  path` line.
#[derive(Debug, PartialEq, Eq)]
enum LineStatus {
    Ok,
    Mismatch,
    Unreadable(String),
}

fn check_line(expected: &str, file_path: &str, key: &ascon_mac::Key) -> LineStatus {
    let Ok(expected) = hex::decode(expected) else {
        return LineStatus::Mismatch;
    };
    let Ok(expected) = <ascon_mac::Tag>::try_from(expected.as_slice()) else {
        return LineStatus::Mismatch;
    };

    match std::fs::read(file_path) {
        Ok(data) => {
            if ascon_mac::verify(key, &data, &expected) {
                LineStatus::Ok
            } else {
                LineStatus::Mismatch
            }
        }
        Err(e) => LineStatus::Unreadable(e.to_string()),
    }
}

/// Verify tags from a tag list file.
pub fn check_mode(tag_file_path: &Path, key: &ascon_mac::Key) -> Result<()> {
    let file = File::open(tag_file_path)
        .with_context(|| format!("Failed to open: {}", tag_file_path.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "tag  filename" (two spaces)
        let Some((expected_tag, file_path)) = line.split_once("  ") else {
            tracing::warn!(line, "invalid tag line format");
            continue;
        };
        let file_path = file_path.trim();
        total += 1;

        match check_line(expected_tag.trim(), file_path, key) {
            LineStatus::Ok => println!("{file_path}: OK"),
            LineStatus::Mismatch => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            LineStatus::Unreadable(e) => {
                println!("{file_path}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} tags verified");
    } else {
        eprintln!("WARNING: {failed} of {total} tags did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
