//! Loading and saving `.ata` files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension used for ATA source files.
pub const EXTENSION: &str = "ata";

#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} already exists (pass --force to overwrite)", .path.display())]
    Exists { path: PathBuf },
}

/// `path` with `.ata` appended when it has no extension.
pub fn with_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(EXTENSION)
    }
}

/// Read a source file as UTF-8.
///
/// `odev` resolves to `odev.ata` when `odev` itself does not exist.
pub fn load(path: &Path) -> Result<String, FileError> {
    let resolved = if path.exists() {
        path.to_path_buf()
    } else {
        with_extension(path)
    };
    tracing::debug!(path = %resolved.display(), "load");
    fs::read_to_string(&resolved).map_err(|source| FileError::Read {
        path: resolved,
        source,
    })
}

/// Write `text` to `path`, appending `.ata` when the path has no extension.
///
/// Returns the path actually written.
pub fn save(path: &Path, text: &str, overwrite: bool) -> Result<PathBuf, FileError> {
    let target = with_extension(path);
    if !overwrite && target.exists() {
        return Err(FileError::Exists { path: target });
    }
    tracing::debug!(path = %target.display(), bytes = text.len(), "save");
    fs::write(&target, text).map_err(|source| FileError::Write {
        path: target.clone(),
        source,
    })?;
    Ok(target)
}
