//! Content catalog chunk
//!
//! An ordered sequence of (type tag, identifier, version) triples naming
//! the external content the save references. The container surfaces these
//! as [`ContentRequirement`]s at load time; resolution itself happens
//! outside this crate, before import. Records carry trailing strings, so
//! the array is always dynamic-size.

use crate::array::{read_array, write_array};
use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{ContentRequirement, ParkState};

pub(crate) struct CatalogCodec;

/// Decode the catalog records at the cursor's position.
///
/// Also used directly by the container at load time, before import.
pub(crate) fn read_requirements(cur: &mut Cursor) -> Result<Vec<ContentRequirement>> {
    read_array(cur, |c| {
        Ok(ContentRequirement {
            type_tag: c.read()?,
            identifier: c.read_string()?,
            version: c.read_string()?,
        })
    })
}

impl ChunkCodec for CatalogCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::ContentCatalog
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        write_array(cur, &state.catalog, |c, req| {
            c.write(req.type_tag);
            c.write_string(&req.identifier);
            c.write_string(&req.version);
            Ok(())
        })
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.catalog = read_requirements(cur)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ContentRequirement> {
        vec![
            ContentRequirement {
                type_tag: 3,
                identifier: "official.scenery.palm-tree".into(),
                version: "1.0.2".into(),
            },
            ContentRequirement {
                type_tag: 7,
                identifier: "community.ride.woodie".into(),
                version: "0.9".into(),
            },
        ]
    }

    #[test]
    fn test_catalog_round_trip() {
        let mut state = ParkState {
            catalog: sample(),
            ..Default::default()
        };
        let mut cur = Cursor::new();
        CatalogCodec.encode(&state, &mut cur).unwrap();

        let mut cur = Cursor::from_bytes(cur.into_bytes());
        state.catalog.clear();
        CatalogCodec.decode(&mut state, &mut cur).unwrap();
        assert_eq!(state.catalog, sample());
    }

    #[test]
    fn test_catalog_is_dynamic_size() {
        let state = ParkState {
            catalog: sample(),
            ..Default::default()
        };
        let mut cur = Cursor::new();
        CatalogCodec.encode(&state, &mut cur).unwrap();

        let mut cur = Cursor::from_bytes(cur.into_bytes());
        let _count = cur.read::<u32>().unwrap();
        let element_size = cur.read::<u32>().unwrap();
        assert_eq!(element_size, 0);
    }

    #[test]
    fn test_empty_catalog_round_trips() {
        let mut state = ParkState::default();
        let mut cur = Cursor::new();
        CatalogCodec.encode(&state, &mut cur).unwrap();

        let mut cur = Cursor::from_bytes(cur.into_bytes());
        CatalogCodec.decode(&mut state, &mut cur).unwrap();
        assert!(state.catalog.is_empty());
    }
}
