//! Artifact format constants and structures.

use bitflags::bitflags;

/// Magic bytes for identifying srsgen rule-set artifacts.
pub const MAGIC: [u8; 8] = *b"SRSGEN\x00\x01";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

/// Header size in bytes.
pub const HEADER_SIZE: usize = 64;

/// Byte offset of the checksum field within the header.
pub const CHECKSUM_OFFSET: usize = 32;

/// Size of one encoded IPv4 CIDR record.
pub const CIDR_RECORD_SIZE: usize = 8;

bitflags! {
    /// Format flags for rule-set artifacts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FormatFlags: u32 {
        /// Header carries a SHA-256 checksum of the artifact.
        const CHECKSUMMED = 0b00000001;
    }
}

/// Artifact header (64 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ArtifactHeader {
    /// Magic bytes: "SRSGEN\x00\x01"
    pub magic: [u8; 8],
    /// Format version
    pub version: u32,
    /// Format flags
    pub flags: u32,
    /// Entry kind tag (see EntryKind::as_u8)
    pub kind: u8,
    /// Reserved padding
    pub _reserved1: [u8; 3],
    /// Number of encoded entries
    pub entry_count: u32,
    /// Size of the payload following the header
    pub payload_size: u32,
    /// Reserved for future use
    pub _reserved2: [u8; 4],
    /// SHA-256 checksum of the artifact with this field zeroed
    pub checksum: [u8; 32],
}

impl ArtifactHeader {
    /// Validate the header magic and version.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.magic != MAGIC {
            return Err(crate::Error::InvalidMagic);
        }
        if self.version > FORMAT_VERSION {
            return Err(crate::Error::UnsupportedVersion(self.version));
        }
        Ok(())
    }

    /// Get format flags.
    pub fn format_flags(&self) -> FormatFlags {
        FormatFlags::from_bits_truncate(self.flags)
    }
}
