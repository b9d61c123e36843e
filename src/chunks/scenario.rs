//! Scenario configuration chunk

use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{ParkState, ScenarioConfig};

pub(crate) struct ScenarioCodec;

impl ChunkCodec for ScenarioCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Scenario
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let s = &state.scenario;
        cur.write_string(&s.name);
        cur.write_string(&s.details);
        cur.write(s.objective_kind);
        cur.write(s.objective_year);
        cur.write(s.objective_guests);
        cur.write(s.objective_value);
        cur.write(s.starting_funds);
        Ok(())
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.scenario = ScenarioConfig {
            name: cur.read_string()?,
            details: cur.read_string()?,
            objective_kind: cur.read()?,
            objective_year: cur.read()?,
            objective_guests: cur.read()?,
            objective_value: cur.read()?,
            starting_funds: cur.read()?,
        };
        Ok(())
    }
}
