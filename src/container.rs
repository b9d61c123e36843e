//! Save container controller
//!
//! Orchestrates one save or one load of a park save file. The controller
//! owns the payload buffer exclusively for the duration of the call; it
//! holds no domain knowledge beyond chunk ordering and mandatoriness;
//! everything domain-specific lives in the chunk codecs.
//!
//! Loading is two-phase: [`ParkSave::load`] parses the header, directory
//! and payload, verifies the digest, and extracts the content catalog;
//! [`ParkSave::import`] performs the full decode. Callers resolve the
//! [`ContentRequirement`]s between the two, since tile and entity data
//! reference content by the indices assigned during resolution.

use crate::chunks::{self, codec_for, CODECS, IMPORT_ORDER};
use crate::cursor::Cursor;
use crate::directory::{ChunkDirectory, ChunkKind, DirectoryBuilder, MANDATORY_CHUNKS};
use crate::error::{Result, SaveError};
use crate::header::Header;
use crate::integrity::payload_digest;
use crate::io;
use crate::state::{ContentRequirement, ParkState};
use std::path::Path;

/// A loaded (or to-be-written) park save container.
pub struct ParkSave {
    header: Header,
    directory: ChunkDirectory,
    payload: Cursor,
    requirements: Vec<ContentRequirement>,
}

impl ParkSave {
    /// Encode `state` into complete file bytes: header, directory, payload.
    ///
    /// Any writer-side invariant violation aborts here, before a
    /// destination is ever touched.
    pub fn to_bytes(state: &ParkState) -> Result<Vec<u8>> {
        let mut payload = Cursor::new();
        let mut builder = DirectoryBuilder::new();

        for codec in CODECS {
            if !codec.has_data(state) {
                continue;
            }
            builder.begin_chunk(codec.kind(), payload.write_tell())?;
            codec.encode(state, &mut payload)?;
            builder.end_chunk(payload.write_tell())?;
        }

        let payload = payload.into_bytes();
        let mut header = Header::new();
        header.chunk_count = builder.len() as u32;
        header.uncompressed_size = payload.len() as u64;
        header.digest = payload_digest(&payload);

        let mut out = Cursor::new();
        out.write_bytes(&header.to_bytes());
        builder.write_to(&mut out)?;
        out.write_bytes(&payload);

        tracing::debug!(
            "encoded save: {} chunks, {} payload bytes",
            header.chunk_count,
            header.uncompressed_size
        );
        Ok(out.into_bytes())
    }

    /// Encode `state` and persist it to `path` atomically.
    pub fn save<P: AsRef<Path>>(state: &ParkState, path: P) -> Result<()> {
        let bytes = Self::to_bytes(state)?;
        io::write_file_atomic(path.as_ref(), &bytes)?;
        tracing::info!("saved park to {}", path.as_ref().display());
        Ok(())
    }

    /// Parse a save container from complete file bytes.
    ///
    /// Validates magic, the version gate, directory bounds and the payload
    /// digest, then extracts the content catalog. The heavier decode is
    /// deferred to [`ParkSave::import`].
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cur = Cursor::from_bytes(data.to_vec());
        let header = Header::read_from(&mut cur)?;

        let directory = ChunkDirectory::read_from(&mut cur, header.chunk_count)?;
        directory.validate(header.uncompressed_size)?;

        let payload_len = usize::try_from(header.uncompressed_size)
            .map_err(|_| SaveError::TruncatedInput)?;
        let payload_bytes = cur.read_vec(payload_len)?;

        if payload_digest(&payload_bytes) != header.digest {
            return Err(SaveError::CorruptFile("payload digest mismatch".into()));
        }

        let mut container = ParkSave {
            header,
            directory,
            payload: Cursor::from_bytes(payload_bytes),
            requirements: Vec::new(),
        };

        if !container.seek_chunk(ChunkKind::ContentCatalog) {
            return Err(SaveError::MissingChunk(ChunkKind::ContentCatalog));
        }
        container.requirements = chunks::read_requirements(&mut container.payload)?;

        Ok(container)
    }

    /// Load a save container from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = io::read_file(path.as_ref())?;
        let container = Self::from_bytes(&bytes)?;
        tracing::info!(
            "loaded park from {} ({} chunks, {} content requirements)",
            path.as_ref().display(),
            container.directory.len(),
            container.requirements.len()
        );
        Ok(container)
    }

    /// The parsed file header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The parsed chunk directory.
    pub fn directory(&self) -> &ChunkDirectory {
        &self.directory
    }

    /// Content the external loader must resolve before [`ParkSave::import`].
    pub fn content_requirements(&self) -> &[ContentRequirement] {
        &self.requirements
    }

    /// Seek the payload cursor to the start of `kind`'s chunk.
    ///
    /// Returns false (not an error) when the chunk is absent: callers
    /// treat absence as "defaults apply" or "file predates this chunk".
    /// Mandatory chunks are enforced separately by load and import.
    pub fn seek_chunk(&mut self, kind: ChunkKind) -> bool {
        match self.directory.find(kind) {
            // Offsets were bounds-checked against the payload at load.
            Some(entry) => self.payload.read_seek(entry.offset).is_ok(),
            None => false,
        }
    }

    /// Decode the full park state.
    ///
    /// Mandatory chunks are checked before any decoding starts, and the
    /// result is built in a fresh [`ParkState`], so a failure never leaves
    /// partially-imported state anywhere.
    pub fn import(&mut self) -> Result<ParkState> {
        for kind in MANDATORY_CHUNKS {
            if self.directory.find(kind).is_none() {
                return Err(SaveError::MissingChunk(kind));
            }
        }

        let mut state = ParkState {
            catalog: self.requirements.clone(),
            ..Default::default()
        };

        for kind in IMPORT_ORDER {
            if !self.seek_chunk(kind) {
                // Optional and absent; mandatory kinds were checked above.
                continue;
            }
            let Some(codec) = codec_for(kind) else {
                continue;
            };
            codec.decode(&mut state, &mut self.payload)?;
        }

        Ok(state)
    }
}
