//! Rule-set artifact reader.

use std::net::Ipv4Addr;

use sha2::{Digest, Sha256};

use super::format::*;
use crate::{EntryKind, Error, Result};

/// Reader for rule-set artifacts.
///
/// Validates magic, version and checksum, then decodes the entry kind and
/// the full entry sequence. CIDR entries come back in masked
/// `network/prefix` form.
pub struct RuleSetReader {
    kind: EntryKind,
    entries: Vec<String>,
}

impl RuleSetReader {
    /// Load from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(Error::Truncated {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let header = unsafe { *(data.as_ptr() as *const ArtifactHeader) };
        header.validate()?;

        let total_size = HEADER_SIZE + header.payload_size as usize;
        if data.len() < total_size {
            return Err(Error::Truncated {
                expected: total_size,
                actual: data.len(),
            });
        }

        if header.format_flags().contains(FormatFlags::CHECKSUMMED) {
            let mut hasher = Sha256::new();
            hasher.update(&data[..CHECKSUM_OFFSET]);
            hasher.update([0u8; 32]);
            hasher.update(&data[HEADER_SIZE..total_size]);
            let checksum = hasher.finalize();
            if checksum.as_slice() != &data[CHECKSUM_OFFSET..HEADER_SIZE] {
                return Err(Error::ChecksumMismatch);
            }
        }

        let kind = EntryKind::from_u8(header.kind).ok_or(Error::InvalidEntryKind(header.kind))?;

        let payload = &data[HEADER_SIZE..total_size];
        let entries = match kind {
            EntryKind::DomainSuffix => decode_domain_payload(payload, header.entry_count)?,
            EntryKind::IpCidr => decode_cidr_payload(payload, header.entry_count)?,
        };

        Ok(Self { kind, entries })
    }

    /// The entry kind this artifact was compiled under.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// The decoded entries, in encoded order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

fn decode_domain_payload(payload: &[u8], count: u32) -> Result<Vec<String>> {
    let mut entries = Vec::with_capacity(count as usize);
    let mut pos = 0usize;

    for _ in 0..count {
        if pos + 2 > payload.len() {
            return Err(Error::Truncated {
                expected: HEADER_SIZE + pos + 2,
                actual: HEADER_SIZE + payload.len(),
            });
        }
        let len = u16::from_le_bytes([payload[pos], payload[pos + 1]]) as usize;
        pos += 2;

        if pos + len > payload.len() {
            return Err(Error::Truncated {
                expected: HEADER_SIZE + pos + len,
                actual: HEADER_SIZE + payload.len(),
            });
        }
        entries.push(String::from_utf8_lossy(&payload[pos..pos + len]).into_owned());
        pos += len;
    }

    Ok(entries)
}

fn decode_cidr_payload(payload: &[u8], count: u32) -> Result<Vec<String>> {
    let needed = count as usize * CIDR_RECORD_SIZE;
    if payload.len() < needed {
        return Err(Error::Truncated {
            expected: HEADER_SIZE + needed,
            actual: HEADER_SIZE + payload.len(),
        });
    }

    let mut entries = Vec::with_capacity(count as usize);
    for record in payload[..needed].chunks_exact(CIDR_RECORD_SIZE) {
        let network = u32::from_be_bytes([record[0], record[1], record[2], record[3]]);
        let prefix_len = record[4];
        entries.push(format!("{}/{}", Ipv4Addr::from(network), prefix_len));
    }

    Ok(entries)
}
