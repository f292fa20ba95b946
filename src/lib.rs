//! fwbuild — build-time helpers for firmware images.
//!
//! This crate provides:
//! - **Config parsing** (`config`): the shared `KEY=VALUE` line rule used by both emitters.
//! - **Header mode** (`header`, binary `autocfg`): include-guarded `#define` header.
//! - **Settings mode** (`settings`, binary `mkconfig`): settings file with version/arch/build metadata.
//! - **Image format** (`format`): 16-byte record header, magic, image type and version.
//! - **Packer** (`packer`, binary `create-img`): frame a payload and append it to an image stream.
//! - **Reader** (`reader`, binary `img-list`): walk the records of an image stream.
//! - **Manifest** (`manifest`, binary `pack-images`): pack several images from a TOML file.

pub mod config;
pub mod format;
pub mod header;
#[cfg(feature = "serde")]
pub mod manifest;
pub mod output;
pub mod packer;
pub mod reader;
pub mod settings;

pub use config::{parse_file, parse_line, parse_str, ConfigEntry, ConfigError};
pub use format::{ImageHeader, ImageType, ImageVersion, IMAGE_HEADER_LEN, IMAGE_MAGIC};
pub use header::{normalize_value, render_header, HeaderError, INCLUDE_GUARD};
#[cfg(feature = "serde")]
pub use manifest::{Manifest, ManifestError, ManifestImage};
pub use output::OutputError;
pub use packer::{append_image, build_record, pack_record, ImageParams, PackError};
pub use reader::{read_records, ReadError, Record, RecordReader};
pub use settings::{render_settings, BuildInfo, SettingsError, Version};

/// Initialize `env_logger` for the command-line tools: stderr, `warn` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Finish a command-line tool: on error, print its message to stderr and exit with status 1.
pub fn exit_on_error<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
