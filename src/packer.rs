//! Image packer: frame a payload with its 16-byte header and append the
//! record to an image stream.
//!
//! Used by the create-img and pack-images binaries. A record is always built
//! completely in memory and written with one call, so a failed run never
//! leaves a truncated header in the output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format::{ImageHeader, ImageType, ImageVersion, IMAGE_HEADER_LEN};
use crate::output::{self, OutputError};

/// Errors produced by the packer.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read payload {path}: {source}")]
    ReadPayload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{name} out of range: {value} (expected 0-255)")]
    ParamOutOfRange { name: &'static str, value: u64 },
    #[error("payload too large: {0} bytes (max 4294967295)")]
    PayloadTooLarge(u64),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Per-record parameters carried in the last four header bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageParams {
    pub image_type: ImageType,
    pub version: ImageVersion,
}

impl ImageParams {
    #[must_use]
    pub const fn new(image_type: ImageType, version: ImageVersion) -> Self {
        Self { image_type, version }
    }

    /// Validate raw command-line values: version major/patch/sub and image type.
    pub fn from_raw(major: u64, patch: u64, sub: u64, image_type: u64) -> Result<Self, PackError> {
        fn byte(name: &'static str, value: u64) -> Result<u8, PackError> {
            u8::try_from(value).map_err(|_| PackError::ParamOutOfRange { name, value })
        }
        let version = ImageVersion::new(
            byte("version major", major)?,
            byte("version patch", patch)?,
            byte("version sub", sub)?,
        );
        Ok(Self::new(ImageType::from(byte("image type", image_type)?), version))
    }
}

/// Header describing `payload`. Fails if the payload does not fit a u32 size field.
pub fn record_header(payload: &[u8], params: &ImageParams) -> Result<ImageHeader, PackError> {
    let len = payload.len() as u64;
    let size = u32::try_from(len).map_err(|_| PackError::PayloadTooLarge(len))?;
    Ok(ImageHeader::new(size, params.image_type, params.version))
}

/// Build one complete record (header + payload).
pub fn build_record(payload: &[u8], params: &ImageParams) -> Result<Vec<u8>, PackError> {
    let header = record_header(payload, params)?;
    Ok(frame(&header, payload))
}

fn frame(header: &ImageHeader, payload: &[u8]) -> Vec<u8> {
    let mut record = Vec::with_capacity(IMAGE_HEADER_LEN + payload.len());
    record.extend_from_slice(&header.to_bytes());
    record.extend_from_slice(payload);
    record
}

/// Write one record to `out` with a single `write_all`. Returns the number of bytes written.
pub fn pack_record<W: Write>(out: &mut W, payload: &[u8], params: &ImageParams) -> Result<u64, PackError> {
    let record = build_record(payload, params)?;
    out.write_all(&record)?;
    Ok(record.len() as u64)
}

/// Read a payload file into memory.
pub fn read_payload<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, PackError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| PackError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })
}

/// Pack `input` and append the record to `output`, creating it if absent.
/// Returns the header that was written.
pub fn append_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    params: &ImageParams,
    output: Q,
) -> Result<ImageHeader, PackError> {
    let payload = read_payload(&input)?;
    let header = record_header(&payload, params)?;
    output::append_file(&output, &frame(&header, &payload))?;
    log::info!(
        "{} -> {} ({}, version {}, {} bytes)",
        input.as_ref().display(),
        output.as_ref().display(),
        header.image_type,
        header.version,
        header.size
    );
    Ok(header)
}

/// Pack several payloads into one buffer, in order, and write it in one go.
/// With `truncate` the output is recreated, otherwise the records are appended.
pub fn write_images<P: AsRef<Path>>(
    images: &[(Vec<u8>, ImageParams)],
    output: P,
    truncate: bool,
) -> Result<u64, PackError> {
    let mut stream = Vec::new();
    for (payload, params) in images {
        pack_record(&mut stream, payload, params)?;
    }
    if truncate {
        output::write_file(&output, &stream)?;
    } else {
        output::append_file(&output, &stream)?;
    }
    Ok(stream.len() as u64)
}
