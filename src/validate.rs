//! Accessibility and size policy checks run before any bytes move.

use std::fs::File;

use crate::error::StegoError;
use crate::header::HEADER_SIZE;
use crate::{MAX_EMBED_RATIO, MIN_HOST_SIZE};

/// Checks that `path` is non-empty and openable for reading.
///
/// `label` names the role of the file ("Host file", "File to hide", ...)
/// and is woven into the error message.
pub fn check_accessible(path: &str, label: &str) -> Result<(), StegoError> {
    if path.is_empty() {
        return Err(StegoError::EmptyPath {
            label: label.to_string(),
        });
    }

    if File::open(path).is_err() {
        return Err(StegoError::NotAccessible {
            label: label.to_string(),
            path: path.to_string(),
        });
    }

    Ok(())
}

/// Validates the host/payload size pair and returns the host's capacity.
///
/// The host must be at least [`MIN_HOST_SIZE`] bytes, and descriptor plus
/// payload may occupy at most [`MAX_EMBED_RATIO`] of the host's size. The
/// ratio product is truncated, not rounded. The returned capacity is what
/// the payload could have used; callers report utilization against it.
pub fn max_payload_size(payload_size: u64, host_size: u64) -> Result<u64, StegoError> {
    if host_size < MIN_HOST_SIZE {
        return Err(StegoError::HostTooSmall {
            minimum: MIN_HOST_SIZE,
        });
    }

    let mut capacity = (host_size as f64 * MAX_EMBED_RATIO) as u64;

    if capacity < HEADER_SIZE as u64 {
        return Err(StegoError::NoCapacity);
    }
    capacity -= HEADER_SIZE as u64;

    if payload_size > capacity {
        return Err(StegoError::PayloadTooLarge {
            payload: payload_size,
            capacity,
        });
    }

    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        let result = check_accessible("", "Host file");
        assert!(matches!(result, Err(StegoError::EmptyPath { .. })));
    }

    #[test]
    fn test_missing_file_rejected() {
        let result = check_accessible("/no/such/file/anywhere", "Host file");
        assert!(matches!(result, Err(StegoError::NotAccessible { .. })));
    }

    #[test]
    fn test_existing_file_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("host.bin");
        std::fs::write(&path, b"data").unwrap();

        assert!(check_accessible(path.to_str().unwrap(), "Host file").is_ok());
    }

    #[test]
    fn test_minimum_host_size_boundary() {
        // One byte short of the minimum fails regardless of payload size.
        let result = max_payload_size(0, MIN_HOST_SIZE - 1);
        assert!(matches!(result, Err(StegoError::HostTooSmall { .. })));

        // Exactly the minimum works, even for an empty payload.
        let capacity = max_payload_size(0, MIN_HOST_SIZE).unwrap();
        assert_eq!(capacity, 8704 - HEADER_SIZE as u64);
    }

    #[test]
    fn test_capacity_formula() {
        // floor(20000 * 0.85) - 272 = 17000 - 272
        assert_eq!(max_payload_size(0, 20_000).unwrap(), 16_728);
    }

    #[test]
    fn test_capacity_boundary() {
        let capacity = max_payload_size(0, 20_000).unwrap();

        // A payload of exactly the capacity fits...
        assert_eq!(max_payload_size(capacity, 20_000).unwrap(), capacity);

        // ...one more byte does not.
        let result = max_payload_size(capacity + 1, 20_000);
        match result {
            Err(StegoError::PayloadTooLarge { payload, capacity: max }) => {
                assert_eq!(payload, capacity + 1);
                assert_eq!(max, capacity);
            }
            other => panic!("expected PayloadTooLarge, got {:?}", other),
        }
    }
}
