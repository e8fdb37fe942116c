//! Embedding pipeline.
//!
//! Produces `host_bytes ++ header ++ payload_bytes` in a single buffer and
//! writes it to the resolved output path:
//! 1. Check that both input files are accessible
//! 2. Validate sizes against the capacity policy
//! 3. Read host and payload wholesale
//! 4. Build and serialize the descriptor
//! 5. Concatenate and write the composite artifact

use crate::error::StegoError;
use crate::fileio::{file_size, read_file, write_file};
use crate::header::{StegoHeader, HEADER_SIZE};
use crate::util::{extract_filename, format_bytes, resolve_output_path};
use crate::validate::{check_accessible, max_payload_size};

/// Configuration for the embedding pipeline.
#[derive(Debug, Clone, Default)]
pub struct EmbedConfig {
    /// Emit progress and capacity details on stderr.
    pub verbose: bool,
}

/// Result of a successful embed.
#[derive(Debug, Clone)]
pub struct EmbedReport {
    /// Where the composite artifact was written (after output-path
    /// resolution, so possibly not what the caller passed in).
    pub output_path: String,
    /// Total size of the artifact in bytes.
    pub total_size: u64,
    /// The payload filename as recorded in the descriptor.
    pub payload_name: String,
    /// Payload size in bytes.
    pub payload_size: u64,
    /// Maximum payload size this host would have allowed.
    pub capacity: u64,
}

/// Embeds the file at `payload_path` inside the file at `host_path`.
///
/// `output_path` is resolved against the host's name: given without an
/// extension, the host's extension is appended so the artifact still looks
/// like the host. See [`resolve_output_path`].
pub fn embed(
    payload_path: &str,
    host_path: &str,
    output_path: &str,
) -> Result<EmbedReport, StegoError> {
    embed_with_config(payload_path, host_path, output_path, &EmbedConfig::default())
}

/// Embeds with custom configuration.
pub fn embed_with_config(
    payload_path: &str,
    host_path: &str,
    output_path: &str,
    config: &EmbedConfig,
) -> Result<EmbedReport, StegoError> {
    check_accessible(payload_path, "File to hide")?;
    check_accessible(host_path, "Host file")?;

    let payload_size = file_size(payload_path)?;
    let host_size = file_size(host_path)?;

    if config.verbose {
        eprintln!(
            "File to hide: {} ({})",
            extract_filename(payload_path),
            format_bytes(payload_size)
        );
        eprintln!(
            "Host file: {} ({})",
            extract_filename(host_path),
            format_bytes(host_size)
        );
    }

    let capacity = max_payload_size(payload_size, host_size)?;

    if config.verbose {
        let utilization = payload_size as f64 / capacity as f64 * 100.0;
        eprintln!("Capacity utilization: {:.1}%", utilization);
        eprintln!(
            "Remaining capacity: {}",
            format_bytes(capacity - payload_size)
        );
    }

    let host_data = read_file(host_path)?;
    let payload_data = read_file(payload_path)?;

    let header = StegoHeader::build(payload_path, payload_size as u32);
    let header_bytes = header.to_bytes();

    let mut output = Vec::with_capacity(host_data.len() + HEADER_SIZE + payload_data.len());
    output.extend_from_slice(&host_data);
    output.extend_from_slice(&header_bytes);
    output.extend_from_slice(&payload_data);

    let final_path = resolve_output_path(output_path, extract_filename(host_path));
    write_file(&final_path, &output)?;

    Ok(EmbedReport {
        output_path: final_path,
        total_size: output.len() as u64,
        payload_name: header.filename_lossy(),
        payload_size,
        capacity,
    })
}
