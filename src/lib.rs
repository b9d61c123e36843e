//! Parksave: chunked binary save container
//!
//! A self-describing, single-file container for persisting and restoring
//! park simulation state:
//!
//! - **Independently seekable chunks** indexed by a directory of
//!   (kind, offset, length) entries
//! - **Self-describing arrays** with automatic fixed/dynamic element-size
//!   detection for record sequences inside a chunk
//! - **SHA-1 integrity digest** over the uncompressed payload
//! - **Target/min version gate** for forward and backward compatibility
//! - **Atomic saves**: the whole file is assembled in memory and persisted
//!   with a rename, so a failed save never leaves a partial file
//!
//! ## File layout
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ Header (48 bytes)                          │
//! │  - Magic: "PSAV"                           │
//! │  - Target/min version, chunk count         │
//! │  - Payload size, compression, digest       │
//! ├────────────────────────────────────────────┤
//! │ Chunk directory (20 bytes × chunk count)   │
//! │  - kind, payload offset, length            │
//! ├────────────────────────────────────────────┤
//! │ Payload (uncompressed chunk bytes)         │
//! │  - covered by the header digest            │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use parksave::{ParkSave, ParkState, Result};
//!
//! # fn main() -> Result<()> {
//! let state = ParkState::default();
//! ParkSave::save(&state, "park.sav")?;
//!
//! let mut container = ParkSave::load("park.sav")?;
//! for req in container.content_requirements() {
//!     // resolve external content before importing
//!     let _ = (&req.identifier, &req.version);
//! }
//! let restored = container.import()?;
//! # Ok(())
//! # }
//! ```

pub mod array;
pub mod container;
pub mod cursor;
pub mod directory;
pub mod error;
pub mod header;
pub mod integrity;
mod io;
pub mod state;

mod chunks;

// Re-export commonly used types
pub use array::{read_array, write_array, ArrayReader, ArrayWriter};
pub use container::ParkSave;
pub use cursor::{Cursor, Scalar};
pub use directory::{ChunkDirectory, ChunkEntry, ChunkKind, MANDATORY_CHUNKS};
pub use error::{Result, SaveError};
pub use header::{Compression, Header, MAGIC, MIN_VERSION, TARGET_VERSION};
pub use integrity::{payload_digest, DIGEST_LEN};
pub use state::{
    AuthoringInfo, ClimateEntry, ClimateState, ContentRequirement, GeneralState, HistoryState,
    InterfaceState, Notification, ParkState, ParkSummary, ResearchItem, ResearchState,
    ScenarioConfig, TileElement, TileMap,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
