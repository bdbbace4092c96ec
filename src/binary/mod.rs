//! Binary rule-set artifact format.
//!
//! The pipeline treats this module as a collaborator with a narrow
//! contract: hand it a [`CategoryRule`](crate::CategoryRule) and a
//! destination, get back a byte-exact artifact or a failure. The layout
//! below is owned entirely by this module.
//!
//! ```text
//! +---------------------+
//! |  HEADER (64 bytes)  |  Magic "SRSGEN\x00\x01", version, flags,
//! +---------------------+  kind tag, entry count, payload size, checksum
//! |  PAYLOAD            |  DOMAIN-SUFFIX: u16 LE length + UTF-8 per entry
//! |                     |  IP-CIDR: 8-byte records (u32 BE net, prefix)
//! +---------------------+
//! ```

pub mod format;
mod reader;
mod writer;

pub use reader::RuleSetReader;
pub use writer::RuleSetWriter;
