//! Framed image record format: constants and the 16-byte header.
//!
//! An image stream is a plain concatenation of records, each a fixed header
//! followed by `size` payload bytes. There is no index or trailer. All
//! multi-byte fields are little-endian.

/// Magic bytes at the start of every record header (`0x20302030` read as a LE u32).
pub const IMAGE_MAGIC: [u8; 4] = [0x30, 0x20, 0x30, 0x20];

/// Size of a record header in bytes: magic (4) + checksum (4) + size (4) + type (1) + version (3).
pub const IMAGE_HEADER_LEN: usize = 4 + 4 + 4 + 1 + 3;

/// Image type byte. Known values come from the bootloader's partition table;
/// anything else is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub enum ImageType {
    Bootloader,
    KernelA,
    KernelB,
    Other(u8),
}

impl From<u8> for ImageType {
    fn from(value: u8) -> Self {
        match value {
            0 => ImageType::Bootloader,
            1 => ImageType::KernelA,
            2 => ImageType::KernelB,
            n => ImageType::Other(n),
        }
    }
}

impl From<ImageType> for u8 {
    fn from(value: ImageType) -> Self {
        match value {
            ImageType::Bootloader => 0,
            ImageType::KernelA => 1,
            ImageType::KernelB => 2,
            ImageType::Other(n) => n,
        }
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageType::Bootloader => f.write_str("bootloader"),
            ImageType::KernelA => f.write_str("kernel-a"),
            ImageType::KernelB => f.write_str("kernel-b"),
            ImageType::Other(n) => write!(f, "type-{n}"),
        }
    }
}

/// Three-byte image version, stored major first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageVersion {
    pub major: u8,
    pub patch: u8,
    pub sub: u8,
}

impl ImageVersion {
    #[must_use]
    pub const fn new(major: u8, patch: u8, sub: u8) -> Self {
        Self { major, patch, sub }
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.major, self.patch, self.sub]
    }
}

impl std::fmt::Display for ImageVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.patch, self.sub)
    }
}

/// Parsed or to-be-written record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    /// Reserved checksum word; the packer always writes zero.
    pub checksum: u32,
    /// Payload length in bytes.
    pub size: u32,
    pub image_type: ImageType,
    pub version: ImageVersion,
}

impl ImageHeader {
    /// Header for a payload of `size` bytes with a zero checksum.
    #[must_use]
    pub const fn new(size: u32, image_type: ImageType, version: ImageVersion) -> Self {
        Self {
            checksum: 0,
            size,
            image_type,
            version,
        }
    }

    /// Encode to the on-disk layout: magic, checksum, size, type, version.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; IMAGE_HEADER_LEN] {
        let mut buf = [0u8; IMAGE_HEADER_LEN];
        buf[0..4].copy_from_slice(&IMAGE_MAGIC);
        buf[4..8].copy_from_slice(&self.checksum.to_le_bytes());
        buf[8..12].copy_from_slice(&self.size.to_le_bytes());
        buf[12] = self.image_type.into();
        buf[13..16].copy_from_slice(&self.version.to_bytes());
        buf
    }

    /// Decode a header. Returns `None` if the magic does not match.
    #[must_use]
    pub fn from_bytes(buf: &[u8; IMAGE_HEADER_LEN]) -> Option<Self> {
        if buf[0..4] != IMAGE_MAGIC {
            return None;
        }
        let checksum = u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        let size = u32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
        Some(Self {
            checksum,
            size,
            image_type: ImageType::from(buf[12]),
            version: ImageVersion::new(buf[13], buf[14], buf[15]),
        })
    }
}
