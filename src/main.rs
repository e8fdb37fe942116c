//! Tailhide - hide any file inside any other file.
//!
//! A CLI tool for append-style file steganography: the payload is written
//! behind the host's bytes with a checksummed descriptor and recovered
//! later by scanning the file tail backwards.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand, InfoCommand};

/// Tailhide - hide any file inside any other file.
#[derive(Parser)]
#[command(name = "tailhide")]
#[command(version)]
#[command(about = "Hide any file inside any other file by appending it behind a checksummed descriptor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a file inside a host file
    Encode(EncodeCommand),

    /// Recover a hidden file from a stego file
    Decode(DecodeCommand),

    /// Show format constants and capacity analysis
    Info(InfoCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Info(cmd) => cmd.execute(),
    }
}
