//! Chunk encoders and decoders
//!
//! One codec per chunk kind, registered behind the [`ChunkCodec`] trait so
//! the container core stays free of domain knowledge. The registry order is
//! the fixed on-disk write order; [`IMPORT_ORDER`] is the separate
//! dependency order import decodes in (tiles first, since later decoders rely on
//! the world dimensions established there).

mod authoring;
mod catalog;
mod climate;
mod general;
mod history;
mod interface;
mod notifications;
mod research;
mod scenario;
mod summary;
mod tiles;

pub(crate) use catalog::read_requirements;

use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::ParkState;

/// Encoder/decoder pair for one chunk kind.
pub(crate) trait ChunkCodec: Sync {
    fn kind(&self) -> ChunkKind;

    /// Whether the state has data for this chunk. Optional chunks return
    /// false to be skipped entirely (absent, not empty).
    fn has_data(&self, _state: &ParkState) -> bool {
        true
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()>;

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()>;
}

/// All codecs in the fixed on-disk write order.
pub(crate) static CODECS: [&dyn ChunkCodec; 11] = [
    &authoring::AuthoringCodec,
    &catalog::CatalogCodec,
    &scenario::ScenarioCodec,
    &general::GeneralCodec,
    &interface::InterfaceCodec,
    &climate::ClimateCodec,
    &tiles::TilesCodec,
    &summary::SummaryCodec,
    &history::HistoryCodec,
    &research::ResearchCodec,
    &notifications::NotificationsCodec,
];

/// Decode dispatch order for import. Tiles come first so world dimensions
/// are known before anything that references them; the catalog is handled
/// at load time, before import runs.
pub(crate) const IMPORT_ORDER: [ChunkKind; 10] = [
    ChunkKind::Tiles,
    ChunkKind::Authoring,
    ChunkKind::Scenario,
    ChunkKind::General,
    ChunkKind::Climate,
    ChunkKind::Research,
    ChunkKind::Interface,
    ChunkKind::History,
    ChunkKind::Notifications,
    ChunkKind::DerivedSummary,
];

/// Look up the codec for a kind.
pub(crate) fn codec_for(kind: ChunkKind) -> Option<&'static dyn ChunkCodec> {
    CODECS.iter().copied().find(|c| c.kind() == kind)
}
