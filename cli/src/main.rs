//! Ascon-Mac CLI
//!
//! Tag files and check tag lists from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, parse_key, tag_files};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "ascon-mac")]
#[command(about = "128-bit Ascon-Mac authentication tags", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to tag (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// 16-byte key as 32 hex characters
    #[arg(short, long, env = "ASCON_MAC_KEY", hide_env_values = true, global = true)]
    key: Option<String>,

    /// Log at debug level (overrides `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify tags from a list file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        tag_file: PathBuf,
    },
}

// =============================================================================
// LOGGING
// =============================================================================

fn setup_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let Some(key_hex) = cli.key.as_deref() else {
        eprintln!("Error: No key given");
        eprintln!("Usage: ascon-mac --key <HEX> [FILE]... or set ASCON_MAC_KEY");
        std::process::exit(1);
    };
    let key = parse_key(key_hex)?;

    match &cli.command {
        Some(Commands::Check { tag_file }) => check_mode(tag_file, &key)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: ascon-mac --key <HEX> [FILE]... or ascon-mac --help");
                std::process::exit(1);
            }

            tag_files(&cli.files, &key)?;
        }
    }

    Ok(())
}
