//! Whole-payload integrity digest
//!
//! The digest is computed over the uncompressed payload bytes only. Header
//! and directory bytes are excluded so that patching header fields after
//! payload emission never invalidates the digest.

use sha1::{Digest, Sha1};

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 20;

/// Compute the SHA-1 digest of the payload.
pub fn payload_digest(payload: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    hasher.update(payload);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = payload_digest(b"payload bytes");
        let b = payload_digest(b"payload bytes");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_detects_single_byte_change() {
        let a = payload_digest(b"payload bytes");
        let b = payload_digest(b"payload byteS");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_payload_sha1() {
        // SHA-1 of the empty string is a fixed vector.
        let expected: [u8; DIGEST_LEN] = [
            0xda, 0x39, 0xa3, 0xee, 0x5e, 0x6b, 0x4b, 0x0d, 0x32, 0x55, 0xbf, 0xef, 0x95, 0x60,
            0x18, 0x90, 0xaf, 0xd8, 0x07, 0x09,
        ];
        assert_eq!(payload_digest(b""), expected);
    }
}
