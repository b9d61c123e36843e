use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{InterfaceState, ParkState};

pub(crate) struct InterfaceCodec;

impl ChunkCodec for InterfaceCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Interface
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.interface.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let ui = state.interface.as_ref().expect("checked by has_data");
        cur.write(ui.camera_x);
        cur.write(ui.camera_y);
        cur.write(ui.zoom);
        cur.write(ui.rotation);
        Ok(())
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.interface = Some(InterfaceState {
            camera_x: cur.read()?,
            camera_y: cur.read()?,
            zoom: cur.read()?,
            rotation: cur.read()?,
        });
        Ok(())
    }
}
