//! # Tailhide - hide any file inside any other file
//!
//! Tailhide is an append-style steganography tool: the payload file is
//! written after the host file's own bytes, behind a fixed-width descriptor
//! that records the payload's size, original filename, and a checksum. The
//! host keeps working in its own viewer (an image still renders, an
//! executable still runs) because nothing before its original end is
//! touched.
//!
//! ## Overview
//!
//! - **Embed**: `host_bytes ++ header ++ payload_bytes` is written to the
//!   output path. The host must be at least 10 KB and header + payload may
//!   use at most 85% of the host's size.
//! - **Extract**: nothing in the file points at the header, so it is found
//!   again by probing every offset from the tail backwards until a window
//!   passes both the magic and checksum tests. The first valid window
//!   (nearest the tail) wins.
//!
//! This is concatenation, not content manipulation: no pixels or samples
//! are altered, and the payload is trivially visible to anyone who inspects
//! the file tail. One payload per host.
//!
//! ## Example
//!
//! ```no_run
//! use tailhide::{embed, extract};
//!
//! // Append secret.pdf behind photo.jpg's bytes.
//! let report = embed("secret.pdf", "photo.jpg", "vacation.jpg")?;
//! println!("wrote {}", report.output_path);
//!
//! // Later, recover it. An empty output path derives the name from the
//! // recovered filename ("extracted_secret.pdf").
//! let recovered = extract("vacation.jpg", "")?;
//! println!("recovered {}", recovered.payload_name);
//! # Ok::<(), tailhide::StegoError>(())
//! ```
//!
//! ## Modules
//!
//! - [`header`]: the fixed 272-byte descriptor (serialize, parse, validate)
//! - [`validate`]: path accessibility and host/payload size policy
//! - [`fileio`]: whole-file reads and writes
//! - [`embed`]: the embedding pipeline
//! - [`extract`]: the extraction pipeline and the backward header scan

/// Magic signature identifying a descriptor ("STEN").
pub const MAGIC_SIGNATURE: u32 = 0x5354_454E;

/// Format version written into every descriptor.
pub const FORMAT_VERSION: u16 = 0x0001;

/// Minimum host file size in bytes (10 KB).
pub const MIN_HOST_SIZE: u64 = 10_240;

/// Maximum fraction of the host that header + payload may occupy.
pub const MAX_EMBED_RATIO: f64 = 0.85;

/// Fixed width of the filename field in the descriptor.
pub const MAX_FILENAME_LEN: usize = 256;

pub mod embed;
pub mod error;
pub mod extract;
pub mod fileio;
pub mod header;
pub mod util;
pub mod validate;

// Re-export commonly used items at the crate root
pub use embed::{embed, embed_with_config, EmbedConfig, EmbedReport};
pub use error::{ErrorKind, StegoError};
pub use extract::{extract, extract_with_config, scan_for_header, ExtractConfig, ExtractReport};
pub use fileio::{file_size, read_file, write_file};
pub use header::{StegoHeader, HEADER_SIZE};
pub use util::{extract_filename, format_bytes, resolve_output_path};
pub use validate::{check_accessible, max_payload_size};
