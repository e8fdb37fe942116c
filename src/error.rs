//! Error types for embedding and extraction.

use thiserror::Error;

use crate::util::format_bytes;

/// Errors that can occur while embedding or extracting a payload.
///
/// Every variant is fatal to the requested operation; there are no retries
/// and no partial recovery. [`StegoError::kind`] groups the variants into
/// the three failure families callers dispatch on.
#[derive(Error, Debug)]
pub enum StegoError {
    /// A required path argument was empty.
    #[error("{label} path cannot be empty")]
    EmptyPath {
        /// What the path was supposed to point at ("Host file", ...).
        label: String,
    },

    /// The file does not exist or cannot be opened for reading.
    #[error("{label} not found or not accessible: {path}")]
    NotAccessible {
        /// What the path was supposed to point at.
        label: String,
        /// The offending path.
        path: String,
    },

    /// Opening a file for reading failed.
    #[error("Cannot open file for reading: {path}")]
    OpenFailed {
        /// The offending path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Reading a file failed or returned short.
    #[error("Error reading file: {path}")]
    ReadFailed {
        /// The offending path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Creating the output file failed.
    #[error("Cannot create output file: {path}")]
    CreateFailed {
        /// The offending path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing the output file failed or was incomplete.
    #[error("Error writing to file: {path}")]
    WriteFailed {
        /// The offending path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The host file is below the minimum supported size.
    #[error("Host file too small. Minimum size: {}", format_bytes(*.minimum))]
    HostTooSmall {
        /// The minimum host size in bytes.
        minimum: u64,
    },

    /// The host is so small that the descriptor alone would not fit.
    #[error("Host file too small to hide any data")]
    NoCapacity,

    /// The payload exceeds the capacity the host allows.
    #[error(
        "The file to hide exceeds the allowable size.\n  File size: {}\n  Maximum allowed: {}\n  Over by: {}",
        format_bytes(*.payload),
        format_bytes(*.capacity),
        format_bytes(*.payload - *.capacity)
    )]
    PayloadTooLarge {
        /// Payload size in bytes.
        payload: u64,
        /// Maximum payload size the host permits.
        capacity: u64,
    },

    /// Fewer bytes than a full descriptor were handed to the parser.
    #[error("Invalid header size")]
    InvalidHeaderSize,

    /// The file is too small to contain a descriptor at all.
    #[error("File too small to contain hidden data")]
    FileTooSmall,

    /// The backward scan exhausted the file without a valid descriptor.
    #[error("No hidden data found in file")]
    NoHiddenData,

    /// A located descriptor failed re-validation.
    #[error("Invalid or corrupted header")]
    CorruptedHeader,

    /// The descriptor declares more payload bytes than the file holds.
    #[error("Corrupted file: size mismatch")]
    SizeMismatch,
}

/// The three failure families: access, size, format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Path empty, file missing, unreadable, or unwritable.
    Access,
    /// Host below minimum size, or payload exceeds capacity.
    Size,
    /// No valid descriptor, or a descriptor inconsistent with the file.
    Format,
}

impl StegoError {
    /// Classifies the error into one of the three failure families.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPath { .. }
            | Self::NotAccessible { .. }
            | Self::OpenFailed { .. }
            | Self::ReadFailed { .. }
            | Self::CreateFailed { .. }
            | Self::WriteFailed { .. } => ErrorKind::Access,
            Self::HostTooSmall { .. } | Self::NoCapacity | Self::PayloadTooLarge { .. } => {
                ErrorKind::Size
            }
            Self::InvalidHeaderSize
            | Self::FileTooSmall
            | Self::NoHiddenData
            | Self::CorruptedHeader
            | Self::SizeMismatch => ErrorKind::Format,
        }
    }
}
