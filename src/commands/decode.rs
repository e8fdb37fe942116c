//! Decode command - recover a hidden file from a stego file.

use anyhow::Result;
use clap::Args;

use tailhide::{extract_with_config, format_bytes, ExtractConfig};

use super::CommandExecutor;

/// Recover a hidden file from a stego file.
///
/// The descriptor is found by scanning the file backwards from its tail;
/// the first window passing both the magic and checksum tests wins.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Path to the stego file to examine
    #[arg(value_name = "STEGO")]
    pub stego: String,

    /// Output path; omitted or empty, a name is derived from the recovered
    /// filename; given without an extension, that name's extension is appended
    #[arg(value_name = "OUTPUT", default_value = "")]
    pub output: String,

    /// Verbose output (descriptor offset and recovered metadata)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let config = ExtractConfig {
            verbose: self.verbose,
        };
        let report = extract_with_config(&self.stego, &self.output, &config)?;

        // Wrappers pattern-match the "Extracted file:" line; keep it intact.
        println!("Extracted file: {}", report.output_path);
        println!("File size: {}", format_bytes(report.payload_size));

        Ok(())
    }
}
