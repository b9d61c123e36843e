//! Authoring metadata chunk

use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{AuthoringInfo, ParkState};

pub(crate) struct AuthoringCodec;

impl ChunkCodec for AuthoringCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Authoring
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.authoring.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let info = state.authoring.as_ref().expect("checked by has_data");
        cur.write_string(&info.tool);
        cur.write_string(&info.tool_version);
        cur.write_string(&info.notes);
        cur.write(info.saved_at);
        Ok(())
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.authoring = Some(AuthoringInfo {
            tool: cur.read_string()?,
            tool_version: cur.read_string()?,
            notes: cur.read_string()?,
            saved_at: cur.read()?,
        });
        Ok(())
    }
}
