//! Output helpers. Callers render the whole artifact in memory and hand it
//! over here, so a failure never leaves a half-written file behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// An output file could not be written.
#[derive(Debug, Error)]
#[error("cannot write {path}: {source}")]
pub struct OutputError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl OutputError {
    fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Create or truncate `path` and write `contents` in one call.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), OutputError> {
    let path = path.as_ref();
    fs::write(path, contents).map_err(|e| OutputError::new(path, e))?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

/// Append `contents` to `path` (created if absent) with a single `write_all`.
pub fn append_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), OutputError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| OutputError::new(path, e))?;
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|e| OutputError::new(path, e))?;
    log::info!("appended {} bytes to {}", contents.len(), path.display());
    Ok(())
}
