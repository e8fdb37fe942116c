//! Whole-file byte I/O.
//!
//! Both operations load or store the entire file in one go; the format has
//! no streaming path. Writes overwrite directly, with no temp-file-and-
//! rename step: a crash mid-write leaves a partial output file.

use std::fs::{self, File};
use std::io::{Read, Write};

use crate::error::StegoError;

/// Reads the entire file at `path` into memory.
pub fn read_file(path: &str) -> Result<Vec<u8>, StegoError> {
    let mut file = File::open(path).map_err(|source| StegoError::OpenFailed {
        path: path.to_string(),
        source,
    })?;

    let mut data = Vec::new();
    file.read_to_end(&mut data)
        .map_err(|source| StegoError::ReadFailed {
            path: path.to_string(),
            source,
        })?;

    Ok(data)
}

/// Writes `data` to `path`, replacing any existing file.
pub fn write_file(path: &str, data: &[u8]) -> Result<(), StegoError> {
    let mut file = File::create(path).map_err(|source| StegoError::CreateFailed {
        path: path.to_string(),
        source,
    })?;

    file.write_all(data)
        .map_err(|source| StegoError::WriteFailed {
            path: path.to_string(),
            source,
        })?;

    Ok(())
}

/// Returns the size of the file at `path` in bytes.
pub fn file_size(path: &str) -> Result<u64, StegoError> {
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|source| StegoError::OpenFailed {
            path: path.to_string(),
            source,
        })
}
