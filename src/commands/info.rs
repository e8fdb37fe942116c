//! Info command - show format constants and capacity analysis.

use anyhow::Result;
use clap::Args;

use tailhide::{
    check_accessible, extract_filename, file_size, format_bytes, max_payload_size, FORMAT_VERSION,
    HEADER_SIZE, MAGIC_SIGNATURE, MAX_EMBED_RATIO, MIN_HOST_SIZE,
};

use super::CommandExecutor;

/// Show format constants, and optionally how much a host file can carry.
#[derive(Args, Debug)]
pub struct InfoCommand {
    /// Analyze the carrying capacity of this host file
    #[arg(long)]
    pub host: Option<String>,

    /// Check whether this payload fits the host
    #[arg(long, requires = "host")]
    pub payload: Option<String>,
}

impl CommandExecutor for InfoCommand {
    fn execute(&self) -> Result<()> {
        println!("Configuration:");
        println!("  Maximum embed ratio: {:.0}%", MAX_EMBED_RATIO * 100.0);
        println!("  Minimum host file size: {}", format_bytes(MIN_HOST_SIZE));
        println!("  Magic signature: 0x{:08X}", MAGIC_SIGNATURE);
        println!("  Format version: {}", FORMAT_VERSION);
        println!("  Descriptor size: {} bytes", HEADER_SIZE);

        let Some(host) = &self.host else {
            return Ok(());
        };

        check_accessible(host, "Host file")?;
        let host_size = file_size(host)?;

        let payload_size = match &self.payload {
            Some(payload) => {
                check_accessible(payload, "File to hide")?;
                file_size(payload)?
            }
            None => 0,
        };

        println!();
        println!("Capacity analysis: {}", extract_filename(host));
        println!("  Host size: {}", format_bytes(host_size));

        match max_payload_size(payload_size, host_size) {
            Ok(capacity) => {
                println!("  Capacity: {}", format_bytes(capacity));
                if let Some(payload) = &self.payload {
                    let utilization = payload_size as f64 / capacity as f64 * 100.0;
                    println!(
                        "  Payload: {} ({})",
                        extract_filename(payload),
                        format_bytes(payload_size)
                    );
                    println!("  Fits: yes ({:.1}% of capacity)", utilization);
                }
            }
            Err(err) => {
                // The analysis itself succeeded; an unusable host is a
                // finding, not a command failure.
                println!("  {}", err);
            }
        }

        Ok(())
    }
}
