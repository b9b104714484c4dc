//! Tag Command
//!
//! File tagging with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Read a whole file and compute its tag as hex.
pub fn tag_file(path: &Path, key: &ascon_mac::Key) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "tagging file");
    Ok(hex::encode(ascon_mac::compute_tag(key, &data)))
}

/// Tag files (Rayon parallelizes automatically when beneficial).
pub fn tag_files(files: &[PathBuf], key: &ascon_mac::Key) -> Result<()> {
    // `collect` on an indexed parallel iterator keeps argument order
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| (file_path, tag_file(file_path, key)))
        .collect();

    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hex_tag) => println!("{}  {}", hex_tag, file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to tag {} file(s)", failed);
    }

    Ok(())
}
