use crate::directory::ChunkKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Invalid magic number in header")]
    BadMagic,

    #[error("Unsupported format version: file requires reader version {file_min}, this reader implements {reader}")]
    UnsupportedVersion { file_min: u32, reader: u32 },

    #[error("Unsupported compression method: {0}")]
    UnsupportedCompression(u32),

    #[error("Mandatory chunk missing: {0}")]
    MissingChunk(ChunkKind),

    #[error("Input truncated: buffer exhausted mid-read")]
    TruncatedInput,

    #[error("String is not valid UTF-8")]
    InvalidString,

    #[error("Corrupt file: {0}")]
    CorruptFile(String),

    #[error("Array region contains record bytes but no record boundaries were declared")]
    EmptyArrayInvariant,

    #[error("Format invariant violated: {0}")]
    FormatInvariant(String),

    #[error("I/O error writing save: {0}")]
    SaveIo(#[source] std::io::Error),

    #[error("I/O error reading save: {0}")]
    LoadIo(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SaveError>;
