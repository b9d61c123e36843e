//! Tile grid chunk
//!
//! World dimensions followed by a fixed-size array of 8-byte tile
//! elements, row-major. Decode validates that the element count matches
//! `width * height`. Later decoders interpret positions against these
//! dimensions, so a mismatch is corruption, not something to pad over.

use crate::array::{read_array, write_array};
use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::{Result, SaveError};
use crate::state::{ParkState, TileElement, TileMap};

pub(crate) struct TilesCodec;

fn encode_element(cur: &mut Cursor, el: &TileElement) {
    cur.write(el.kind);
    cur.write(el.flags);
    cur.write(el.base_height);
    cur.write(el.clearance_height);
    cur.write(el.surface_style);
    cur.write(el.edge_style);
    cur.write(el.water_level);
    cur.write(el.ownership);
}

fn decode_element(cur: &mut Cursor) -> Result<TileElement> {
    Ok(TileElement {
        kind: cur.read()?,
        flags: cur.read()?,
        base_height: cur.read()?,
        clearance_height: cur.read()?,
        surface_style: cur.read()?,
        edge_style: cur.read()?,
        water_level: cur.read()?,
        ownership: cur.read()?,
    })
}

impl ChunkCodec for TilesCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Tiles
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let map = &state.tiles;
        cur.write(map.width);
        cur.write(map.height);
        write_array(cur, &map.elements, |c, el| {
            encode_element(c, el);
            Ok(())
        })
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        let width: u32 = cur.read()?;
        let height: u32 = cur.read()?;
        let elements = read_array(cur, decode_element)?;

        let expected = (width as u64) * (height as u64);
        if elements.len() as u64 != expected {
            return Err(SaveError::CorruptFile(format!(
                "tile count {} does not match {}x{} map",
                elements.len(),
                width,
                height
            )));
        }

        state.tiles = TileMap {
            width,
            height,
            elements,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> TileMap {
        let mut map = TileMap::new(3, 2);
        for (i, el) in map.elements.iter_mut().enumerate() {
            el.kind = (i % 4) as u8;
            el.base_height = i as u8;
            el.water_level = 14;
        }
        map
    }

    #[test]
    fn test_tiles_round_trip() {
        let mut state = ParkState {
            tiles: sample_map(),
            ..Default::default()
        };
        let mut cur = Cursor::new();
        TilesCodec.encode(&state, &mut cur).unwrap();

        let mut cur = Cursor::from_bytes(cur.into_bytes());
        state.tiles = TileMap::default();
        TilesCodec.decode(&mut state, &mut cur).unwrap();
        assert_eq!(state.tiles, sample_map());
    }

    #[test]
    fn test_tiles_are_fixed_size() {
        let state = ParkState {
            tiles: sample_map(),
            ..Default::default()
        };
        let mut cur = Cursor::new();
        TilesCodec.encode(&state, &mut cur).unwrap();

        let mut cur = Cursor::from_bytes(cur.into_bytes());
        let _ = cur.read::<u32>().unwrap(); // width
        let _ = cur.read::<u32>().unwrap(); // height
        let _count = cur.read::<u32>().unwrap();
        assert_eq!(cur.read::<u32>().unwrap(), 8); // element size
    }

    #[test]
    fn test_tile_count_mismatch_is_corruption() {
        let mut cur = Cursor::new();
        cur.write(4u32); // width
        cur.write(4u32); // height: expects 16 elements
        write_array(&mut cur, &[TileElement::default(); 3], |c, el| {
            encode_element(c, el);
            Ok(())
        })
        .unwrap();

        let mut state = ParkState::default();
        let mut cur = Cursor::from_bytes(cur.into_bytes());
        assert!(matches!(
            TilesCodec.decode(&mut state, &mut cur),
            Err(SaveError::CorruptFile(_))
        ));
    }
}
