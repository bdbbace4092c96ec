//! Rule-set artifact writer.

use std::io::Write;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use sha2::{Digest, Sha256};

use super::format::*;
use crate::{CategoryRule, EntryKind, Error, Result};

/// Rule-set artifact writer.
///
/// Encoding is deterministic: the same rule always produces the same bytes.
pub struct RuleSetWriter {
    buffer: Vec<u8>,
}

impl RuleSetWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(64 * 1024),
        }
    }

    /// Encode a rule into artifact bytes.
    pub fn encode(&mut self, rule: &CategoryRule) -> Result<Vec<u8>> {
        self.buffer.clear();

        // Reserve space for header
        self.buffer.resize(HEADER_SIZE, 0);

        let payload_size = match rule.kind() {
            EntryKind::DomainSuffix => self.write_domain_payload(rule.entries())?,
            EntryKind::IpCidr => self.write_cidr_payload(rule.entries())?,
        };

        let header = ArtifactHeader {
            magic: MAGIC,
            version: FORMAT_VERSION,
            flags: FormatFlags::CHECKSUMMED.bits(),
            kind: rule.kind().as_u8(),
            _reserved1: [0; 3],
            entry_count: rule.entry_count() as u32,
            payload_size,
            _reserved2: [0; 4],
            checksum: [0; 32], // Will be filled later
        };

        let header_bytes = unsafe {
            std::slice::from_raw_parts(&header as *const ArtifactHeader as *const u8, HEADER_SIZE)
        };
        self.buffer[..HEADER_SIZE].copy_from_slice(header_bytes);

        // Compute checksum (hash everything with the checksum field zeroed)
        let mut hasher = Sha256::new();
        hasher.update(&self.buffer[..CHECKSUM_OFFSET]);
        hasher.update([0u8; 32]);
        hasher.update(&self.buffer[HEADER_SIZE..]);
        let checksum = hasher.finalize();

        self.buffer[CHECKSUM_OFFSET..HEADER_SIZE].copy_from_slice(&checksum);

        Ok(std::mem::take(&mut self.buffer))
    }

    /// Encode a rule and write the artifact to `writer`.
    ///
    /// Returns the number of bytes written. The destination is flushed
    /// before returning.
    pub fn write_to<W: Write>(writer: &mut W, rule: &CategoryRule) -> Result<u64> {
        let data = Self::new().encode(rule)?;
        writer.write_all(&data)?;
        writer.flush()?;
        Ok(data.len() as u64)
    }

    fn write_domain_payload(&mut self, entries: &[String]) -> Result<u32> {
        let start_offset = self.buffer.len();

        // Each entry: u16 LE length + UTF-8 bytes, in source order.
        for entry in entries {
            let len = u16::try_from(entry.len())
                .map_err(|_| Error::EntryTooLong(entry.clone()))?;
            self.buffer.extend_from_slice(&len.to_le_bytes());
            self.buffer.extend_from_slice(entry.as_bytes());
        }

        Ok((self.buffer.len() - start_offset) as u32)
    }

    fn write_cidr_payload(&mut self, entries: &[String]) -> Result<u32> {
        let start_offset = self.buffer.len();

        // Each entry: network u32 BE + prefix_len + padding = 8 bytes.
        for entry in entries {
            let (network, prefix_len) = parse_v4_prefix(entry)?;
            self.buffer.extend_from_slice(&network.to_be_bytes());
            self.buffer.push(prefix_len);
            self.buffer.extend_from_slice(&[0u8; 3]);
        }

        Ok((self.buffer.len() - start_offset) as u32)
    }
}

impl Default for RuleSetWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an IPv4 CIDR entry into a masked network and prefix length.
///
/// A bare address is accepted as a /32.
fn parse_v4_prefix(entry: &str) -> Result<(u32, u8)> {
    if let Ok(net) = entry.parse::<Ipv4Net>() {
        return Ok((u32::from(net.network()), net.prefix_len()));
    }
    if let Ok(addr) = entry.parse::<Ipv4Addr>() {
        return Ok((u32::from(addr), 32));
    }
    Err(Error::InvalidCidrPattern(entry.to_string()))
}
