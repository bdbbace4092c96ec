//! Error types for srsgen.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for srsgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Source root directory missing or unreadable
    #[error("cannot read source root {}: {source}", .path.display())]
    SourceRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact emission failed for a category
    #[error("failed to emit rule-set for category {category}: {source}")]
    Emit {
        category: String,
        #[source]
        source: Box<Error>,
    },

    /// Invalid CIDR pattern
    #[error("invalid CIDR pattern: {0}")]
    InvalidCidrPattern(String),

    /// Entry longer than the encoding can represent
    #[error("entry too long to encode: {0}")]
    EntryTooLong(String),

    /// Invalid binary file magic bytes
    #[error("invalid magic bytes: expected SRSGEN header")]
    InvalidMagic,

    /// Unsupported binary format version
    #[error("unsupported format version: {0}")]
    UnsupportedVersion(u32),

    /// Checksum mismatch
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// Artifact shorter than its declared layout
    #[error("truncated artifact: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Unknown entry kind tag in an artifact header
    #[error("invalid entry kind tag: {0}")]
    InvalidEntryKind(u8),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for srsgen operations.
pub type Result<T> = std::result::Result<T, Error>;
