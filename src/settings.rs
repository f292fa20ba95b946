//! Settings mode: a normalized settings file with build metadata.
//!
//! Three metadata lines come first (version code, architecture, build
//! timestamp), then one line per config entry: `KEY = VALUE`, or
//! `# KEY is not set` when the value is empty. Values are not normalized.

use std::path::Path;

use thiserror::Error;

use crate::config::{self, ConfigEntry, ConfigError};
use crate::output::{self, OutputError};

/// Timestamp layout used for `CONFIG_BUILD_INFO`.
pub const BUILD_INFO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors produced while generating a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Kernel version as three byte-range components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u8,
    pub patch: u8,
    pub sub: u8,
}

impl Version {
    #[must_use]
    pub const fn new(major: u8, patch: u8, sub: u8) -> Self {
        Self { major, patch, sub }
    }

    /// Build from wider integers, rejecting anything above 255.
    pub fn from_components(major: u64, patch: u64, sub: u64) -> Result<Self, ConfigError> {
        fn byte(name: &'static str, value: u64) -> Result<u8, ConfigError> {
            u8::try_from(value).map_err(|_| ConfigError::VersionOutOfRange { name, value })
        }
        Ok(Self::new(
            byte("major", major)?,
            byte("patch", patch)?,
            byte("sub", sub)?,
        ))
    }

    /// Packed code: `(major << 16) | (patch << 8) | sub`.
    #[must_use]
    pub const fn code(self) -> u32 {
        ((self.major as u32) << 16) | ((self.patch as u32) << 8) | self.sub as u32
    }
}

/// Metadata written ahead of the config entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: Version,
    pub arch: String,
    /// Human readable build time, normally [`BuildInfo::now`].
    pub timestamp: String,
}

impl BuildInfo {
    /// Build info stamped with the current local time.
    pub fn now(version: Version, arch: impl Into<String>) -> Self {
        Self::with_timestamp(version, arch, local_timestamp())
    }

    /// Build info with a caller-supplied timestamp (reproducible builds).
    pub fn with_timestamp(version: Version, arch: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            version,
            arch: arch.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn local_timestamp() -> String {
    chrono::Local::now().format(BUILD_INFO_FORMAT).to_string()
}

/// Render the settings text: metadata lines, then one line per entry.
#[must_use]
pub fn render_settings(info: &BuildInfo, entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("CONFIG_VERSION_CODE = {}\n", info.version.code()));
    out.push_str(&format!("CONFIG_ARCH = \"{}\"\n", info.arch));
    out.push_str(&format!("CONFIG_BUILD_INFO = \"{}\"\n", info.timestamp));
    for entry in entries {
        if entry.is_unset() {
            out.push_str(&format!("# {} is not set\n", entry.key));
        } else {
            out.push_str(&format!("{} = {}\n", entry.key, entry.value));
        }
    }
    out
}

/// Read `input`, render the settings, and write them to `output`.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(
    info: &BuildInfo,
    input: P,
    output: Q,
) -> Result<(), SettingsError> {
    let entries = config::parse_file(input)?;
    let text = render_settings(info, &entries);
    output::write_file(output, text.as_bytes())?;
    Ok(())
}
