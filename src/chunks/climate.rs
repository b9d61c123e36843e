//! Climate chunk: current weather plus a fixed-size forecast array.

use crate::array::{read_array, write_array};
use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{ClimateEntry, ClimateState, ParkState};

pub(crate) struct ClimateCodec;

impl ChunkCodec for ClimateCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Climate
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.climate.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let climate = state.climate.as_ref().expect("checked by has_data");
        cur.write(climate.kind);
        cur.write(climate.temperature);
        cur.write(climate.weather);
        cur.write(climate.rain_level);
        write_array(cur, &climate.forecast, |c, entry| {
            c.write(entry.temperature);
            c.write(entry.weather);
            c.write(entry.rain_level);
            Ok(())
        })
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        let kind = cur.read()?;
        let temperature = cur.read()?;
        let weather = cur.read()?;
        let rain_level = cur.read()?;
        let forecast = read_array(cur, |c| {
            Ok(ClimateEntry {
                temperature: c.read()?,
                weather: c.read()?,
                rain_level: c.read()?,
            })
        })?;
        state.climate = Some(ClimateState {
            kind,
            temperature,
            weather,
            rain_level,
            forecast,
        });
        Ok(())
    }
}
