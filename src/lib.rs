//! srsgen - Compile categorized plaintext allow-lists into binary rule-set
//! artifacts.
//!
//! Operators of policy-based traffic routing maintain flat directories of
//! list files, one category per file: domain-suffix lists and IPv4-CIDR
//! lists. This crate turns each category into one compact, versioned binary
//! artifact that a downstream matching engine loads at runtime.
//!
//! # Pipeline
//!
//! 1. **Discover** categories: every `*.lst` file directly under a source
//!    root, named after its file stem.
//! 2. **Read** each category's entries: trimmed lines, with blanks and `#`
//!    comments dropped, order preserved, content otherwise verbatim.
//! 3. **Build** one [`CategoryRule`] per category, tagged with the run's
//!    [`EntryKind`]. Categories with no usable entries are skipped.
//! 4. **Emit** one `<category>.srs` artifact per rule into the kind's
//!    output directory. An emission failure aborts the run.
//!
//! # Quick Start
//!
//! ```ignore
//! use srsgen::{compile_kind, CompileConfig, EntryKind, LogObserver};
//!
//! let config = CompileConfig::new(
//!     EntryKind::DomainSuffix,
//!     "allow-domains/Services",
//!     "sing-geosite",
//! );
//! let summary = compile_kind(&config, &mut LogObserver)?;
//! println!("{} artifacts written", summary.artifacts.len());
//! ```
//!
//! Domain and IP compilation are independent runs sharing no state; the
//! `srsgen` binary runs both, domains first.

mod entry_kind;
mod error;
mod rule;

pub mod binary;
pub mod compiler;
pub mod source;

// Re-export core types
pub use entry_kind::EntryKind;
pub use error::{Error, Result};
pub use rule::{CategoryRule, RuleError};

// Re-export the driver surface
pub use compiler::{
    compile_kind, ensure_output_dir, ArtifactReport, CompileConfig, CompileObserver, KindSummary,
    LogObserver, ARTIFACT_EXTENSION, LIST_EXTENSION,
};

// Re-export encoder types for advanced usage
pub use binary::{RuleSetReader, RuleSetWriter};
