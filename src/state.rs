//! Park state passed into chunk encoders and decoders
//!
//! The container core holds no domain knowledge beyond chunk ordering and
//! mandatoriness; everything a chunk codec reads or writes lives in this
//! explicit context struct. Optional sections are `Option`: `None` means
//! the chunk is not emitted at all, which is distinct from an emitted
//! section that happens to be empty.

use serde::{Deserialize, Serialize};

/// One entry of the content catalog: a piece of external content the save
/// references and the loader must resolve before import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRequirement {
    /// Opaque content type tag.
    pub type_tag: u32,
    /// Symbolic content identifier.
    pub identifier: String,
    /// Opaque version string of the content the save was written against.
    pub version: String,
}

/// Authoring metadata: which tool wrote the file, and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoringInfo {
    pub tool: String,
    pub tool_version: String,
    pub notes: String,
    /// Unix seconds at save time.
    pub saved_at: u64,
}

/// Scenario configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub name: String,
    pub details: String,
    pub objective_kind: u32,
    pub objective_year: u16,
    pub objective_guests: u32,
    pub objective_value: i64,
    pub starting_funds: i64,
}

/// General game state, including the park economy scalars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralState {
    pub ticks: u64,
    pub elapsed_months: u32,
    pub rng_seed: [u32; 2],
    pub cash: i64,
    pub loan: i64,
    pub max_loan: i64,
    pub entrance_fee: u16,
    pub park_rating: u16,
    pub guest_count: u32,
    pub flags: u64,
}

/// Interface state: camera placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceState {
    pub camera_x: i32,
    pub camera_y: i32,
    pub zoom: u8,
    pub rotation: u8,
}

/// One forecast step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClimateEntry {
    pub temperature: i8,
    pub weather: u8,
    pub rain_level: u8,
}

/// Climate state and forecast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClimateState {
    pub kind: u8,
    pub temperature: i8,
    pub weather: u8,
    pub rain_level: u8,
    pub forecast: Vec<ClimateEntry>,
}

/// One map tile element; exactly 8 bytes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileElement {
    pub kind: u8,
    pub flags: u8,
    pub base_height: u8,
    pub clearance_height: u8,
    pub surface_style: u8,
    pub edge_style: u8,
    pub water_level: u8,
    pub ownership: u8,
}

/// The tile grid. `elements` holds `width * height` entries in row-major
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    pub width: u32,
    pub height: u32,
    pub elements: Vec<TileElement>,
}

impl TileMap {
    /// Create an all-default grid of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        TileMap {
            width,
            height,
            elements: vec![TileElement::default(); (width as usize) * (height as usize)],
        }
    }
}

/// Derived park summary. Recomputable from the rest of the state; persisted
/// so inspectors can show it without a full decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkSummary {
    pub guest_count: u32,
    pub park_value: i64,
    pub company_value: i64,
}

/// Financial and rating history series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryState {
    pub cash: Vec<i64>,
    pub rating: Vec<u16>,
    pub guests: Vec<u32>,
}

/// One research item; exactly 5 bytes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResearchItem {
    pub category: u8,
    pub entry: u32,
}

/// Research state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchState {
    pub funding: u8,
    pub progress_stage: u8,
    pub progress: u16,
    pub expected_month: u8,
    pub expected_day: u8,
    pub completed: Vec<ResearchItem>,
    pub uninvented: Vec<ResearchItem>,
}

/// One queued notification. Variable-size on the wire (trailing text).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub category: u32,
    pub subject: u32,
    pub ticks: u64,
    pub text: String,
}

/// The full park state a save file round-trips.
///
/// Mandatory sections are plain fields; optional sections are `Option` and
/// their chunks are only emitted when `Some`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkState {
    pub authoring: Option<AuthoringInfo>,
    pub catalog: Vec<ContentRequirement>,
    pub scenario: ScenarioConfig,
    pub general: GeneralState,
    pub interface: Option<InterfaceState>,
    pub climate: Option<ClimateState>,
    pub tiles: TileMap,
    pub summary: Option<ParkSummary>,
    pub history: Option<HistoryState>,
    pub research: Option<ResearchState>,
    pub notifications: Option<Vec<Notification>>,
}
