//! Header mode: turn config entries into an include-guarded C header of
//! `#define` lines.
//!
//! Tri-state values are normalized: `y`/`Y` become `1`, `m`/`M` become `2`,
//! and empty or `n`/`N` entries are dropped. Anything else is emitted as-is.

use std::path::Path;

use thiserror::Error;

use crate::config::{self, ConfigEntry};
use crate::output::{self, OutputError};

/// Include guard wrapped around the generated header.
pub const INCLUDE_GUARD: &str = "__AUTOCFG_H__";

/// Errors produced while generating a header.
#[derive(Debug, Error)]
pub enum HeaderError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Normalized value for a `#define`, or `None` if the symbol is not defined.
#[must_use]
pub fn normalize_value(raw: &str) -> Option<&str> {
    match raw {
        "" | "n" | "N" => None,
        "y" | "Y" => Some("1"),
        "m" | "M" => Some("2"),
        other => Some(other),
    }
}

/// Render the header text for `entries`, preserving their order.
#[must_use]
pub fn render_header(entries: &[ConfigEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("#ifndef {INCLUDE_GUARD}\n"));
    out.push_str(&format!("#define {INCLUDE_GUARD}\n"));
    out.push('\n');
    for entry in entries {
        match normalize_value(&entry.value) {
            Some(value) => {
                out.push_str(&format!("#define {} {}\n", entry.key, value));
            }
            None => log::debug!("{}: not defined", entry.key),
        }
    }
    out.push('\n');
    out.push_str("#endif\n");
    out
}

/// Read `input`, render the header, and write it to `output`.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<(), HeaderError> {
    let entries = config::parse_file(input)?;
    let text = render_header(&entries);
    output::write_file(output, text.as_bytes())?;
    Ok(())
}
