//! Save file header
//!
//! The header is the fixed-size block at the start of every save file. It
//! carries the magic constant, the target/min version pair driving the
//! forward-compatibility gate, the chunk count, the uncompressed payload
//! size, the compression method, and the 20-byte payload digest.
//!
//! The digest covers payload bytes only, never the header or the chunk
//! directory.

use crate::cursor::Cursor;
use crate::error::{Result, SaveError};
use crate::integrity::DIGEST_LEN;

/// Magic constant: the bytes `PSAV` read as a little-endian u32.
pub const MAGIC: u32 = u32::from_le_bytes(*b"PSAV");

/// Format version this crate writes.
pub const TARGET_VERSION: u32 = 2;

/// Oldest reader version guaranteed able to parse files this crate writes.
pub const MIN_VERSION: u32 = 1;

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 48;

/// Payload compression method.
///
/// Only `None` is implemented; tag 1 is reserved for a future codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Compression {
    None = 0,
}

impl Compression {
    /// Convert from the on-disk tag.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Compression::None),
            _ => None,
        }
    }
}

/// Save file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Magic number identifying the format.
    pub magic: u32,

    /// Format version the file was written with.
    pub target_version: u32,

    /// Oldest reader version able to parse the file.
    pub min_version: u32,

    /// Number of chunk directory entries following the header.
    pub chunk_count: u32,

    /// Payload length in bytes, uncompressed.
    pub uncompressed_size: u64,

    /// Compression method tag (0 = none, 1 = reserved).
    pub compression: u32,

    /// SHA-1 digest of the uncompressed payload bytes.
    pub digest: [u8; DIGEST_LEN],
}

impl Header {
    /// Create a header with current version constants and no payload.
    pub fn new() -> Self {
        Header {
            magic: MAGIC,
            target_version: TARGET_VERSION,
            min_version: MIN_VERSION,
            chunk_count: 0,
            uncompressed_size: 0,
            compression: Compression::None as u32,
            digest: [0; DIGEST_LEN],
        }
    }

    /// Validate magic, the version gate, and the compression tag.
    ///
    /// A file is readable when its `min_version` does not exceed this
    /// reader's implemented version, regardless of its `target_version`.
    pub fn validate(&self) -> Result<()> {
        if self.magic != MAGIC {
            return Err(SaveError::BadMagic);
        }

        if self.min_version > TARGET_VERSION {
            return Err(SaveError::UnsupportedVersion {
                file_min: self.min_version,
                reader: TARGET_VERSION,
            });
        }

        if Compression::from_u32(self.compression).is_none() {
            return Err(SaveError::UnsupportedCompression(self.compression));
        }

        Ok(())
    }

    /// Serialize the header to its fixed-width encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut cur = Cursor::new();
        cur.write(self.magic);
        cur.write(self.target_version);
        cur.write(self.min_version);
        cur.write(self.chunk_count);
        cur.write(self.uncompressed_size);
        cur.write(self.compression);
        cur.write_bytes(&self.digest);
        debug_assert_eq!(cur.len() as usize, HEADER_LEN);
        cur.into_bytes()
    }

    /// Parse and validate a header from the cursor's read position.
    pub fn read_from(cur: &mut Cursor) -> Result<Self> {
        let mut header = Header {
            magic: cur.read()?,
            target_version: cur.read()?,
            min_version: cur.read()?,
            chunk_count: cur.read()?,
            uncompressed_size: cur.read()?,
            compression: cur.read()?,
            digest: [0; DIGEST_LEN],
        };
        cur.read_exact(&mut header.digest)?;

        header.validate()?;

        Ok(header)
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
