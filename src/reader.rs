//! Record reader: walk an image stream record by record.
//!
//! Does not interpret payload contents. A stream that ends exactly on a
//! record boundary ends iteration cleanly; anything shorter is an error.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use thiserror::Error;

use crate::format::{ImageHeader, IMAGE_HEADER_LEN};

/// Upper bound on payload preallocation; a corrupt size field must not trigger a huge allocation.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Errors produced by the record reader.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid magic at offset {0}")]
    InvalidMagic(u64),
    #[error("truncated header at offset {offset}: {got} of 16 bytes")]
    TruncatedHeader { offset: u64, got: usize },
    #[error("truncated payload at offset {offset}: header declares {expected} bytes, got {got}")]
    TruncatedPayload { offset: u64, expected: u32, got: u64 },
}

/// One framed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Byte offset of the header within the stream.
    pub offset: u64,
    pub header: ImageHeader,
    pub payload: Vec<u8>,
}

/// Iterator over the records of an image stream.
pub struct RecordReader<R> {
    inner: R,
    offset: u64,
    done: bool,
}

impl RecordReader<BufReader<File>> {
    /// Open an image file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            done: false,
        }
    }

    /// Byte offset of the next record.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Read the next record, or `Ok(None)` at a clean end of stream.
    pub fn next_record(&mut self) -> Result<Option<Record>, ReadError> {
        let start = self.offset;
        let mut buf = [0u8; IMAGE_HEADER_LEN];
        let got = read_full(&mut self.inner, &mut buf)?;
        if got == 0 {
            return Ok(None);
        }
        if got < IMAGE_HEADER_LEN {
            return Err(ReadError::TruncatedHeader { offset: start, got });
        }
        let header = ImageHeader::from_bytes(&buf).ok_or(ReadError::InvalidMagic(start))?;

        let mut payload = Vec::with_capacity((header.size as usize).min(PREALLOC_LIMIT));
        let read = (&mut self.inner)
            .take(u64::from(header.size))
            .read_to_end(&mut payload)? as u64;
        if read < u64::from(header.size) {
            return Err(ReadError::TruncatedPayload {
                offset: start,
                expected: header.size,
                got: read,
            });
        }

        self.offset = start + IMAGE_HEADER_LEN as u64 + read;
        log::debug!("record at {start}: {} bytes, {}", header.size, header.image_type);
        Ok(Some(Record {
            offset: start,
            header,
            payload,
        }))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.next_record().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

/// Read every record of an image file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>, ReadError> {
    RecordReader::open(path)?.collect()
}

/// Fill `buf` as far as the stream allows; returns bytes read (short only at EOF).
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
