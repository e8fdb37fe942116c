//! Extraction pipeline and the backward header scan.
//!
//! Nothing in a composite artifact records where the descriptor sits, so
//! extraction has to find it again: a 272-byte window slides from the tail
//! of the file towards the front, one byte at a time, and each position is
//! parsed and validated until a window passes both the magic and checksum
//! tests. The first valid window - the one nearest the tail - wins.
//!
//! The checksum is a plain additive sum, not a cryptographic digest. A
//! window that happens to satisfy both tests is indistinguishable from a
//! real descriptor, and because the nearest-the-tail match wins, such a
//! coincidence inside the payload region shadows the true descriptor. That
//! risk is inherent to the format; tools reading these artifacts rely on
//! the scan order being exactly tail-first, so it must not be changed.

use crate::error::StegoError;
use crate::fileio::{read_file, write_file};
use crate::header::{StegoHeader, HEADER_SIZE};
use crate::util::{format_bytes, resolve_output_path};
use crate::validate::check_accessible;

/// Configuration for the extraction pipeline.
#[derive(Debug, Clone, Default)]
pub struct ExtractConfig {
    /// Emit progress details on stderr.
    pub verbose: bool,
}

/// Result of a successful extraction.
#[derive(Debug, Clone)]
pub struct ExtractReport {
    /// Where the recovered payload was written.
    pub output_path: String,
    /// The payload's original filename as recorded in the descriptor.
    pub payload_name: String,
    /// Recovered payload size in bytes.
    pub payload_size: u64,
    /// Byte offset of the descriptor inside the artifact.
    pub header_offset: usize,
}

/// Scans `data` backwards for a valid descriptor.
///
/// Probes every offset from `data.len() - 272` down to `1` inclusive;
/// offset `0` is never probed, so a descriptor at the very start of the
/// buffer (an artifact with an empty host) is not found. Returns the
/// first valid window together with its offset, or `None` when the scan
/// exhausts its range.
///
/// Each probe parses the full window and recomputes the checksum only
/// after the cheap magic comparison passes; the scan stays a plain linear
/// walk on purpose, matching the observable cost profile other readers of
/// this format expect.
pub fn scan_for_header(data: &[u8]) -> Result<Option<(usize, StegoHeader)>, StegoError> {
    if data.len() < HEADER_SIZE {
        return Ok(None);
    }

    let mut i = data.len() - HEADER_SIZE;
    while i >= 1 {
        let candidate = StegoHeader::from_bytes(&data[i..i + HEADER_SIZE])?;
        if candidate.is_valid() {
            return Ok(Some((i, candidate)));
        }
        i -= 1;
    }

    Ok(None)
}

/// Extracts the payload hidden in the file at `stego_path`.
///
/// `output_path` may be empty to derive a name from the recovered
/// filename; given without an extension, the recovered name's extension is
/// appended. See [`resolve_output_path`].
pub fn extract(stego_path: &str, output_path: &str) -> Result<ExtractReport, StegoError> {
    extract_with_config(stego_path, output_path, &ExtractConfig::default())
}

/// Extracts with custom configuration.
pub fn extract_with_config(
    stego_path: &str,
    output_path: &str,
    config: &ExtractConfig,
) -> Result<ExtractReport, StegoError> {
    check_accessible(stego_path, "Stego file")?;

    let data = read_file(stego_path)?;

    if config.verbose {
        eprintln!("Stego file size: {}", format_bytes(data.len() as u64));
    }

    if data.len() < HEADER_SIZE {
        return Err(StegoError::FileTooSmall);
    }

    let (header_offset, header) = scan_for_header(&data)?.ok_or(StegoError::NoHiddenData)?;

    // Redundant with the scan, kept as an explicit guard before slicing.
    if !header.is_valid() {
        return Err(StegoError::CorruptedHeader);
    }

    if config.verbose {
        eprintln!("Hidden data located at offset {}", header_offset);
        eprintln!("Original filename: {}", header.filename_lossy());
        eprintln!(
            "Hidden file size: {}",
            format_bytes(header.payload_size as u64)
        );
    }

    let payload_offset = header_offset + HEADER_SIZE;
    if payload_offset as u64 + header.payload_size as u64 > data.len() as u64 {
        return Err(StegoError::SizeMismatch);
    }

    let payload = &data[payload_offset..payload_offset + header.payload_size as usize];

    let final_path = resolve_output_path(output_path, &header.filename_lossy());
    write_file(&final_path, payload)?;

    Ok(ExtractReport {
        output_path: final_path,
        payload_name: header.filename_lossy(),
        payload_size: payload.len() as u64,
        header_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAGIC_SIGNATURE;

    fn artifact(host: &[u8], name: &str, payload: &[u8]) -> Vec<u8> {
        let header = StegoHeader::build(name, payload.len() as u32);
        let mut data = Vec::new();
        data.extend_from_slice(host);
        data.extend_from_slice(&header.to_bytes());
        data.extend_from_slice(payload);
        data
    }

    #[test]
    fn test_scan_finds_header_after_host() {
        let data = artifact(&[0u8; 1000], "x.bin", b"payload");

        let (offset, header) = scan_for_header(&data).unwrap().unwrap();
        assert_eq!(offset, 1000);
        assert_eq!(header.payload_size, 7);
        assert_eq!(header.filename_lossy(), "x.bin");
    }

    #[test]
    fn test_scan_returns_none_on_plain_data() {
        let data: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();
        assert!(scan_for_header(&data).unwrap().is_none());
    }

    #[test]
    fn test_scan_never_probes_offset_zero() {
        // Empty host: the descriptor sits at offset 0, which the scan
        // deliberately skips, so the artifact reads as having no payload.
        let data = artifact(&[], "x.bin", b"payload");
        assert!(scan_for_header(&data).unwrap().is_none());
    }

    #[test]
    fn test_scan_rejects_magic_without_checksum() {
        // Plant raw magic bytes in the payload region, nearer the tail
        // than the real descriptor. The scan probes them first and must
        // move past them when the checksum does not hold.
        let mut payload = vec![0x11u8; 600];
        payload[300..304].copy_from_slice(&MAGIC_SIGNATURE.to_le_bytes());
        let data = artifact(&[0u8; 1000], "x.bin", &payload);

        let (offset, _) = scan_for_header(&data).unwrap().unwrap();
        assert_eq!(offset, 1000);
    }

    #[test]
    fn test_scan_prefers_match_nearest_tail() {
        // Two artifacts nested: embed once, then use the result as the
        // host of a second embed. The scan must report the outer (newer)
        // descriptor, the one nearest the tail.
        let inner = artifact(&[0u8; 500], "inner.bin", b"old");
        let data = artifact(&inner, "outer.bin", b"new");

        let (offset, header) = scan_for_header(&data).unwrap().unwrap();
        assert_eq!(offset, inner.len());
        assert_eq!(header.filename_lossy(), "outer.bin");
    }

    #[test]
    fn test_extract_size_mismatch() {
        let dir = tempfile::tempdir().unwrap();

        // Descriptor claims 1000 bytes but only 5 follow it.
        let header = StegoHeader::build("evil.bin", 1000);
        let mut data = vec![0u8; 1000];
        data.extend_from_slice(&header.to_bytes());
        data.extend_from_slice(b"stub!");

        let stego = dir.path().join("bad.bin");
        std::fs::write(&stego, &data).unwrap();
        let out = dir.path().join("out.bin");

        let result = extract(stego.to_str().unwrap(), out.to_str().unwrap());
        assert!(matches!(result, Err(StegoError::SizeMismatch)));
    }

    #[test]
    fn test_extract_too_small_file() {
        let dir = tempfile::tempdir().unwrap();
        let stego = dir.path().join("tiny.bin");
        std::fs::write(&stego, &[0u8; HEADER_SIZE - 1]).unwrap();

        let result = extract(stego.to_str().unwrap(), "");
        assert!(matches!(result, Err(StegoError::FileTooSmall)));
    }

    #[test]
    fn test_extract_no_hidden_data() {
        let dir = tempfile::tempdir().unwrap();
        let stego = dir.path().join("plain.bin");
        std::fs::write(&stego, &vec![0x55u8; 4096]).unwrap();

        let result = extract(stego.to_str().unwrap(), "");
        assert!(matches!(result, Err(StegoError::NoHiddenData)));
    }
}
