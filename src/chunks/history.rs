//! History chunk: three fixed-size series (cash, rating, guests).

use crate::array::{read_array, write_array};
use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{HistoryState, ParkState};

pub(crate) struct HistoryCodec;

impl ChunkCodec for HistoryCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::History
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.history.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let history = state.history.as_ref().expect("checked by has_data");
        write_array(cur, &history.cash, |c, v| {
            c.write(*v);
            Ok(())
        })?;
        write_array(cur, &history.rating, |c, v| {
            c.write(*v);
            Ok(())
        })?;
        write_array(cur, &history.guests, |c, v| {
            c.write(*v);
            Ok(())
        })
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.history = Some(HistoryState {
            cash: read_array(cur, |c| c.read::<i64>())?,
            rating: read_array(cur, |c| c.read::<u16>())?,
            guests: read_array(cur, |c| c.read::<u32>())?,
        });
        Ok(())
    }
}
