//! Derived park summary chunk
//!
//! Recomputable from the full state; persisted so inspectors and load
//! screens can show it without decoding everything else. Import decodes it
//! as written rather than recomputing, keeping save/load/save byte-stable.

use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{ParkState, ParkSummary};

pub(crate) struct SummaryCodec;

impl ChunkCodec for SummaryCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::DerivedSummary
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.summary.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let summary = state.summary.as_ref().expect("checked by has_data");
        cur.write(summary.guest_count);
        cur.write(summary.park_value);
        cur.write(summary.company_value);
        Ok(())
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.summary = Some(ParkSummary {
            guest_count: cur.read()?,
            park_value: cur.read()?,
            company_value: cur.read()?,
        });
        Ok(())
    }
}
