//! General game state chunk
//!
//! Holds the global counters and the park economy scalars.

use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{GeneralState, ParkState};

pub(crate) struct GeneralCodec;

impl ChunkCodec for GeneralCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::General
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let g = &state.general;
        cur.write(g.ticks);
        cur.write(g.elapsed_months);
        cur.write(g.rng_seed[0]);
        cur.write(g.rng_seed[1]);
        cur.write(g.cash);
        cur.write(g.loan);
        cur.write(g.max_loan);
        cur.write(g.entrance_fee);
        cur.write(g.park_rating);
        cur.write(g.guest_count);
        cur.write(g.flags);
        Ok(())
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.general = GeneralState {
            ticks: cur.read()?,
            elapsed_months: cur.read()?,
            rng_seed: [cur.read()?, cur.read()?],
            cash: cur.read()?,
            loan: cur.read()?,
            max_loan: cur.read()?,
            entrance_fee: cur.read()?,
            park_rating: cur.read()?,
            guest_count: cur.read()?,
            flags: cur.read()?,
        };
        Ok(())
    }
}
