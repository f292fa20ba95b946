//! TOML pack manifest: several images packed into one stream in one pass.
//!
//! ```toml
//! output = "build/firmware.img"
//! truncate = true
//!
//! [[image]]
//! path = "build/boot.bin"
//! version = [1, 0, 3]
//! type = 0
//! ```
//!
//! Relative paths resolve against the manifest's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::format::{ImageType, ImageVersion};
use crate::packer::{self, ImageParams, PackError};

/// Errors produced while loading or applying a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("manifest lists no images")]
    Empty,
    #[error(transparent)]
    Pack(#[from] PackError),
}

/// One `[[image]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestImage {
    pub path: PathBuf,
    /// `[major, patch, sub]`.
    pub version: [u8; 3],
    #[serde(rename = "type")]
    pub image_type: u8,
}

impl ManifestImage {
    #[must_use]
    pub fn params(&self) -> ImageParams {
        let [major, patch, sub] = self.version;
        ImageParams::new(ImageType::from(self.image_type), ImageVersion::new(major, patch, sub))
    }
}

/// Parsed manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub output: PathBuf,
    /// Recreate the output instead of appending to it.
    #[serde(default)]
    pub truncate: bool,
    #[serde(default, rename = "image")]
    pub images: Vec<ManifestImage>,
}

impl Manifest {
    /// Parse manifest text. Paths are left as written.
    pub fn from_toml(text: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = toml::from_str(text)?;
        if manifest.images.is_empty() {
            return Err(ManifestError::Empty);
        }
        Ok(manifest)
    }

    /// Load a manifest file and resolve relative paths against its directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_toml(&text)?;
        if let Some(base) = path.parent() {
            manifest.resolve_paths(base);
        }
        Ok(manifest)
    }

    /// Make relative paths relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.output);
        for image in &mut self.images {
            resolve(&mut image.path);
        }
    }

    /// Read every payload, then write all records to the output at once.
    /// Returns the number of bytes written.
    pub fn pack(&self) -> Result<u64, ManifestError> {
        let images = self
            .images
            .iter()
            .map(|image| Ok((packer::read_payload(&image.path)?, image.params())))
            .collect::<Result<Vec<_>, PackError>>()?;
        let written = packer::write_images(&images, &self.output, self.truncate)?;
        log::info!(
            "packed {} images into {} ({written} bytes)",
            images.len(),
            self.output.display()
        );
        Ok(written)
    }
}
