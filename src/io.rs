//! File I/O for save containers
//!
//! Saves are always assembled fully in memory, then persisted through a
//! sibling temporary file and an atomic rename. A failed save may leave a
//! stale `.tmp` sibling behind but never a partial file at the destination
//! path.

use crate::error::{Result, SaveError};
use std::fs;
use std::path::{Path, PathBuf};

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `bytes` to `path` atomically.
pub(crate) fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes).map_err(SaveError::SaveIo)?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        SaveError::SaveIo(e)
    })
}

/// Read the whole file at `path`.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(SaveError::LoadIo)
}
