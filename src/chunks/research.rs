//! Research chunk: funding scalars plus completed/uninvented item arrays.

use crate::array::{read_array, write_array};
use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{ParkState, ResearchItem, ResearchState};

pub(crate) struct ResearchCodec;

fn write_items(cur: &mut Cursor, items: &[ResearchItem]) -> Result<()> {
    write_array(cur, items, |c, item| {
        c.write(item.category);
        c.write(item.entry);
        Ok(())
    })
}

fn read_items(cur: &mut Cursor) -> Result<Vec<ResearchItem>> {
    read_array(cur, |c| {
        Ok(ResearchItem {
            category: c.read()?,
            entry: c.read()?,
        })
    })
}

impl ChunkCodec for ResearchCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Research
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.research.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let research = state.research.as_ref().expect("checked by has_data");
        cur.write(research.funding);
        cur.write(research.progress_stage);
        cur.write(research.progress);
        cur.write(research.expected_month);
        cur.write(research.expected_day);
        write_items(cur, &research.completed)?;
        write_items(cur, &research.uninvented)
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.research = Some(ResearchState {
            funding: cur.read()?,
            progress_stage: cur.read()?,
            progress: cur.read()?,
            expected_month: cur.read()?,
            expected_day: cur.read()?,
            completed: read_items(cur)?,
            uninvented: read_items(cur)?,
        });
        Ok(())
    }
}
