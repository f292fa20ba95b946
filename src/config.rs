//! Config file parsing shared by the header and settings emitters.
//!
//! A config file is line oriented: `KEY=VALUE` entries, `#` comments, and
//! anything else silently ignored. Both emitters go through [`parse_line`] so
//! they always agree on what an entry is.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("version component {name} out of range: {value} (expected 0-255)")]
    VersionOutOfRange { name: &'static str, value: u64 },
}

/// One `KEY=VALUE` entry, trimmed. `value` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// True when the entry has no value (`KEY=`).
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.value.is_empty()
    }
}

/// Parse a single line. Returns `None` for blank lines, comments, lines
/// without `=`, and lines whose key is empty. Splits on the first `=` only.
#[must_use]
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Parse all entries from config text, in input order. Duplicate keys are kept.
/// `\n`, `\r\n` and a lone `\r` all end a line.
#[must_use]
pub fn parse_str(text: &str) -> Vec<ConfigEntry> {
    text.split(['\n', '\r'])
        .enumerate()
        .filter_map(|(idx, line)| match parse_line(line) {
            Some((key, value)) => {
                log::debug!("line {}: {key} = {value:?}", idx + 1);
                Some(ConfigEntry::new(key, value))
            }
            None => {
                if !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                    log::debug!("line {}: skipped (no key=value)", idx + 1);
                }
                None
            }
        })
        .collect()
}

/// Read and parse a config file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<ConfigEntry>, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_str(&text);
    log::debug!("{}: {} entries", path.display(), entries.len());
    Ok(entries)
}
