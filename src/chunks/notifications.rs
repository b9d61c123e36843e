//! Notification queue chunk
//!
//! Records end in a variable-length message, so this array always degrades
//! to dynamic size unless every message happens to have the same length.

use crate::array::{read_array, write_array};
use crate::chunks::ChunkCodec;
use crate::cursor::Cursor;
use crate::directory::ChunkKind;
use crate::error::Result;
use crate::state::{Notification, ParkState};

pub(crate) struct NotificationsCodec;

impl ChunkCodec for NotificationsCodec {
    fn kind(&self) -> ChunkKind {
        ChunkKind::Notifications
    }

    fn has_data(&self, state: &ParkState) -> bool {
        state.notifications.is_some()
    }

    fn encode(&self, state: &ParkState, cur: &mut Cursor) -> Result<()> {
        let queue = state.notifications.as_ref().expect("checked by has_data");
        write_array(cur, queue, |c, n| {
            c.write(n.category);
            c.write(n.subject);
            c.write(n.ticks);
            c.write_string(&n.text);
            Ok(())
        })
    }

    fn decode(&self, state: &mut ParkState, cur: &mut Cursor) -> Result<()> {
        state.notifications = Some(read_array(cur, |c| {
            Ok(Notification {
                category: c.read()?,
                subject: c.read()?,
                ticks: c.read()?,
                text: c.read_string()?,
            })
        })?);
        Ok(())
    }
}
