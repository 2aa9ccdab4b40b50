//! Filesystem helpers for the output directory and generated files.

use std::path::Path;

use crate::error::{Error, Result};

/// True when any filesystem entry, including a dangling symlink, exists at `path`.
pub fn entry_exists<P: AsRef<Path>>(path: P) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Creates exactly one directory level; the parent must already exist.
pub fn create_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    std::fs::create_dir(path).map_err(Error::IoError)
}

/// Creates `path` when missing. Returns whether a directory was created.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }
    create_dir(path)?;
    Ok(true)
}

/// Writes `content` to `dest_path`, replacing any existing file.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
