//! The fixed-width descriptor written between host and payload bytes.
//!
//! Layout (little-endian, no padding, 272 bytes total):
//!
//! | offset | width | field          |
//! |--------|-------|----------------|
//! | 0      | 4     | magic          |
//! | 4      | 2     | version        |
//! | 6      | 4     | payload size   |
//! | 10     | 2     | filename length|
//! | 12     | 256   | filename       |
//! | 268    | 4     | checksum       |
//!
//! The byte width is load-bearing: extraction rediscovers the descriptor by
//! sliding a 272-byte window backwards through the file, so any change to
//! the layout breaks every existing artifact.

use crate::error::StegoError;
use crate::util::extract_filename;
use crate::{FORMAT_VERSION, MAGIC_SIGNATURE, MAX_FILENAME_LEN};

/// Packed byte width of [`StegoHeader`].
pub const HEADER_SIZE: usize = 272;

/// Descriptor identifying and describing an embedded payload.
///
/// The filename is kept as raw bytes: [`StegoHeader::from_bytes`] must
/// accept arbitrary 272-byte windows (the scan probes every offset), and
/// those windows are usually not UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StegoHeader {
    /// Magic signature, [`MAGIC_SIGNATURE`] for real descriptors.
    pub magic: u32,
    /// Format version.
    pub version: u16,
    /// Byte length of the embedded payload.
    pub payload_size: u32,
    /// Number of meaningful bytes in `filename` (at most 255 when built).
    pub filename_len: u16,
    /// Original payload filename, null-padded after `filename_len` bytes.
    pub filename: [u8; MAX_FILENAME_LEN],
    /// Additive checksum over all preceding fields.
    pub checksum: u32,
}

impl StegoHeader {
    /// Builds a descriptor for a payload about to be embedded.
    ///
    /// `filename` may be a full path; only its final component is kept, and
    /// that is cut to 255 bytes. The cut is recorded in `filename_len`, so
    /// a truncated name round-trips as exactly the bytes that were stored.
    pub fn build(filename: &str, payload_size: u32) -> Self {
        let name = extract_filename(filename).as_bytes();
        let len = name.len().min(MAX_FILENAME_LEN - 1);

        let mut buf = [0u8; MAX_FILENAME_LEN];
        buf[..len].copy_from_slice(&name[..len]);

        let mut header = Self {
            magic: MAGIC_SIGNATURE,
            version: FORMAT_VERSION,
            payload_size,
            filename_len: len as u16,
            filename: buf,
            checksum: 0,
        };
        header.checksum = header.compute_checksum();
        header
    }

    /// Recomputes the additive checksum from the current field values.
    ///
    /// Wrapping u32 sum of magic, version, payload size, filename length,
    /// and the first `filename_len` filename bytes. A parsed window may
    /// claim a length beyond the field width; the sum never reads past it.
    pub fn compute_checksum(&self) -> u32 {
        let mut sum = self
            .magic
            .wrapping_add(self.version as u32)
            .wrapping_add(self.payload_size)
            .wrapping_add(self.filename_len as u32);

        let take = (self.filename_len as usize).min(MAX_FILENAME_LEN);
        for &byte in &self.filename[..take] {
            sum = sum.wrapping_add(byte as u32);
        }
        sum
    }

    /// True iff the magic matches and the stored checksum is consistent.
    ///
    /// The magic test runs first so that the per-window cost during the
    /// scan stays trivial for the overwhelming majority of offsets.
    pub fn is_valid(&self) -> bool {
        self.magic == MAGIC_SIGNATURE && self.checksum == self.compute_checksum()
    }

    /// Serializes the descriptor to its packed 272-byte form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(&self.magic.to_le_bytes());
        buf[4..6].copy_from_slice(&self.version.to_le_bytes());
        buf[6..10].copy_from_slice(&self.payload_size.to_le_bytes());
        buf[10..12].copy_from_slice(&self.filename_len.to_le_bytes());
        buf[12..268].copy_from_slice(&self.filename);
        buf[268..272].copy_from_slice(&self.checksum.to_le_bytes());
        buf
    }

    /// Parses a descriptor from the first 272 bytes of `bytes`.
    ///
    /// Parsing is purely positional and accepts any window, valid or not;
    /// callers decide with [`StegoHeader::is_valid`]. Only a short input is
    /// an error.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        if bytes.len() < HEADER_SIZE {
            return Err(StegoError::InvalidHeaderSize);
        }

        let mut filename = [0u8; MAX_FILENAME_LEN];
        filename.copy_from_slice(&bytes[12..268]);

        Ok(Self {
            magic: read_u32(bytes, 0),
            version: read_u16(bytes, 4),
            payload_size: read_u32(bytes, 6),
            filename_len: read_u16(bytes, 10),
            filename,
            checksum: read_u32(bytes, 268),
        })
    }

    /// The stored filename as text, lossily converted for display and
    /// output naming.
    pub fn filename_lossy(&self) -> String {
        let len = (self.filename_len as usize).min(MAX_FILENAME_LEN);
        String::from_utf8_lossy(&self.filename[..len]).into_owned()
    }
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
