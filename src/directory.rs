//! Chunk kinds and the chunk directory
//!
//! The directory is the ordered table persisted immediately after the
//! header, mapping each chunk kind to the byte range it occupies inside the
//! payload. Entries are written in emission order, not sorted by kind, and
//! a kind appears at most once per file.
//!
//! Unknown kind tags are preserved on read so newer files remain loadable;
//! import simply never dispatches on them.

use crate::cursor::Cursor;
use crate::error::{Result, SaveError};
use std::fmt;

/// Chunk kind tags.
///
/// This is a closed, namespaced enumeration: tags 0x08–0x0D are reserved
/// for entity, ride, banner, animation, staff and string-table sections and
/// are never emitted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ChunkKind {
    /// Authoring metadata: which tool wrote the file, and when.
    Authoring = 0x01,
    /// Content catalog: the (type, identifier, version) triples the
    /// external content loader must resolve before import.
    ContentCatalog = 0x02,
    /// Scenario configuration.
    Scenario = 0x03,
    /// General game state, including park economy scalars.
    General = 0x04,
    /// Interface state (camera, rotation).
    Interface = 0x05,
    /// Climate state and forecast.
    Climate = 0x06,
    /// Tile grid.
    Tiles = 0x07,
    /// Reserved: entities.
    Entities = 0x08,
    /// Reserved: rides.
    Rides = 0x09,
    /// Reserved: banners.
    Banners = 0x0A,
    /// Reserved: map animations.
    Animations = 0x0B,
    /// Reserved: staff.
    Staff = 0x0C,
    /// Reserved: user string table.
    Strings = 0x0D,
    /// Derived, recomputable park summary.
    DerivedSummary = 0x0E,
    /// Financial and rating history series.
    History = 0x0F,
    /// Research state.
    Research = 0x10,
    /// Queued notifications.
    Notifications = 0x11,
}

/// Chunk kinds a well-formed file must contain.
pub const MANDATORY_CHUNKS: [ChunkKind; 4] = [
    ChunkKind::ContentCatalog,
    ChunkKind::Scenario,
    ChunkKind::General,
    ChunkKind::Tiles,
];

impl ChunkKind {
    /// Convert from the on-disk tag. Unknown tags return `None`.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0x01 => Some(ChunkKind::Authoring),
            0x02 => Some(ChunkKind::ContentCatalog),
            0x03 => Some(ChunkKind::Scenario),
            0x04 => Some(ChunkKind::General),
            0x05 => Some(ChunkKind::Interface),
            0x06 => Some(ChunkKind::Climate),
            0x07 => Some(ChunkKind::Tiles),
            0x08 => Some(ChunkKind::Entities),
            0x09 => Some(ChunkKind::Rides),
            0x0A => Some(ChunkKind::Banners),
            0x0B => Some(ChunkKind::Animations),
            0x0C => Some(ChunkKind::Staff),
            0x0D => Some(ChunkKind::Strings),
            0x0E => Some(ChunkKind::DerivedSummary),
            0x0F => Some(ChunkKind::History),
            0x10 => Some(ChunkKind::Research),
            0x11 => Some(ChunkKind::Notifications),
            _ => None,
        }
    }

    /// Stable lowercase name, used in error messages and by inspectors.
    pub fn name(self) -> &'static str {
        match self {
            ChunkKind::Authoring => "authoring",
            ChunkKind::ContentCatalog => "content-catalog",
            ChunkKind::Scenario => "scenario",
            ChunkKind::General => "general",
            ChunkKind::Interface => "interface",
            ChunkKind::Climate => "climate",
            ChunkKind::Tiles => "tiles",
            ChunkKind::Entities => "entities",
            ChunkKind::Rides => "rides",
            ChunkKind::Banners => "banners",
            ChunkKind::Animations => "animations",
            ChunkKind::Staff => "staff",
            ChunkKind::Strings => "strings",
            ChunkKind::DerivedSummary => "derived-summary",
            ChunkKind::History => "history",
            ChunkKind::Research => "research",
            ChunkKind::Notifications => "notifications",
        }
    }

    /// Whether a well-formed file must contain this chunk.
    pub fn is_mandatory(self) -> bool {
        MANDATORY_CHUNKS.contains(&self)
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directory entry size in bytes.
pub const ENTRY_LEN: usize = 20;

/// One chunk directory entry.
///
/// The kind is kept as the raw tag so entries with unknown kinds survive a
/// load/save cycle through a reader that predates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkEntry {
    /// Raw chunk kind tag.
    pub kind: u32,

    /// Byte offset of the chunk within the payload.
    pub offset: u64,

    /// Byte length of the chunk.
    pub length: u64,
}

impl ChunkEntry {
    /// Serialize this entry at the cursor's write position.
    pub fn write_to(&self, cur: &mut Cursor) {
        cur.write(self.kind);
        cur.write(self.offset);
        cur.write(self.length);
    }

    /// Parse one entry from the cursor's read position.
    pub fn read_from(cur: &mut Cursor) -> Result<Self> {
        Ok(ChunkEntry {
            kind: cur.read()?,
            offset: cur.read()?,
            length: cur.read()?,
        })
    }
}

/// Parsed chunk directory, immutable for the duration of one load.
#[derive(Debug, Clone, Default)]
pub struct ChunkDirectory {
    entries: Vec<ChunkEntry>,
}

impl ChunkDirectory {
    /// Parse `count` entries from the cursor.
    pub fn read_from(cur: &mut Cursor, count: u32) -> Result<Self> {
        // Cap preallocation; a hostile count is caught by the reads below.
        let mut entries = Vec::with_capacity(count.min(256) as usize);
        for _ in 0..count {
            entries.push(ChunkEntry::read_from(cur)?);
        }
        Ok(ChunkDirectory { entries })
    }

    /// All entries, in emission order.
    pub fn entries(&self) -> &[ChunkEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry for a chunk kind.
    pub fn find(&self, kind: ChunkKind) -> Option<&ChunkEntry> {
        self.entries.iter().find(|e| e.kind == kind as u32)
    }

    /// Check every entry against the payload size and reject duplicate
    /// known kinds.
    pub fn validate(&self, payload_len: u64) -> Result<()> {
        let mut seen = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let end = entry
                .offset
                .checked_add(entry.length)
                .ok_or_else(|| SaveError::CorruptFile("chunk range overflow".into()))?;
            if end > payload_len {
                return Err(SaveError::CorruptFile(format!(
                    "chunk 0x{:02x} range {}..{} exceeds payload size {}",
                    entry.kind, entry.offset, end, payload_len
                )));
            }
            if let Some(kind) = ChunkKind::from_u32(entry.kind) {
                if seen.contains(&entry.kind) {
                    return Err(SaveError::CorruptFile(format!(
                        "duplicate chunk: {kind}"
                    )));
                }
                seen.push(entry.kind);
            }
        }
        Ok(())
    }
}

/// Write-side directory accumulator.
///
/// Tracks the chunk currently being written and enforces begin/end pairing
/// and per-kind uniqueness.
#[derive(Debug, Default)]
pub struct DirectoryBuilder {
    entries: Vec<ChunkEntry>,
    open: Option<(ChunkKind, u64)>,
}

impl DirectoryBuilder {
    pub fn new() -> Self {
        DirectoryBuilder::default()
    }

    /// Record the start of a chunk at `offset`.
    pub fn begin_chunk(&mut self, kind: ChunkKind, offset: u64) -> Result<()> {
        if let Some((open_kind, _)) = self.open {
            return Err(SaveError::FormatInvariant(format!(
                "begin_chunk({kind}) while {open_kind} is still open"
            )));
        }
        if self.entries.iter().any(|e| e.kind == kind as u32) {
            return Err(SaveError::FormatInvariant(format!(
                "chunk {kind} written twice"
            )));
        }
        self.open = Some((kind, offset));
        Ok(())
    }

    /// Close the open chunk at `offset` and append its directory entry.
    ///
    /// Zero-length chunks are recorded too; an empty chunk is distinct from
    /// an absent one.
    pub fn end_chunk(&mut self, offset: u64) -> Result<()> {
        let (kind, start) = self.open.take().ok_or_else(|| {
            SaveError::FormatInvariant("end_chunk without begin_chunk".into())
        })?;
        self.entries.push(ChunkEntry {
            kind: kind as u32,
            offset: start,
            length: offset - start,
        });
        Ok(())
    }

    /// Number of completed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no chunks have been completed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize all entries in emission order.
    pub fn write_to(&self, cur: &mut Cursor) -> Result<()> {
        if let Some((kind, _)) = self.open {
            return Err(SaveError::FormatInvariant(format!(
                "directory serialized while {kind} is still open"
            )));
        }
        for entry in &self.entries {
            entry.write_to(cur);
        }
        Ok(())
    }
}
