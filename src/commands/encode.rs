//! Encode command - hide a payload file inside a host file.

use anyhow::Result;
use clap::Args;

use tailhide::{embed_with_config, format_bytes, EmbedConfig};

use super::CommandExecutor;

/// Hide a file inside a host file.
///
/// The output is the host's bytes followed by a checksummed descriptor and
/// the payload bytes, so the host still opens normally in its own viewer.
/// The host must be at least 10 KB, and descriptor plus payload may use at
/// most 85% of the host's size.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Path to the host file the payload is hidden in
    #[arg(value_name = "HOST")]
    pub host: String,

    /// Path to the file to hide
    #[arg(value_name = "PAYLOAD")]
    pub payload: String,

    /// Output path; given without an extension, the host's extension is appended
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Verbose output (sizes and capacity utilization)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let config = EmbedConfig {
            verbose: self.verbose,
        };
        let report = embed_with_config(&self.payload, &self.host, &self.output, &config)?;

        // Wrappers pattern-match the "Output file:" line; keep it intact.
        println!("Output file: {}", report.output_path);
        println!("Total size: {}", format_bytes(report.total_size));
        println!(
            "Hidden file: {} ({})",
            report.payload_name,
            format_bytes(report.payload_size)
        );

        Ok(())
    }
}
