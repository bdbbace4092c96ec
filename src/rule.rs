//! The structured rule handed to the rule-set encoder.

use thiserror::Error;

use crate::EntryKind;

/// Error type for rule construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// No usable entries, so there is no rule to build
    #[error("no entries to build a rule from")]
    Empty,
}

/// A single rule describing one category: an entry kind plus the full
/// ordered sequence of raw entries from that category's source file.
///
/// Entries are carried verbatim. A `CategoryRule` is never empty; callers
/// that get [`RuleError::Empty`] back are expected to skip the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    kind: EntryKind,
    entries: Vec<String>,
}

impl CategoryRule {
    /// Build a rule from a category's raw entries.
    pub fn new(kind: EntryKind, entries: Vec<String>) -> Result<Self, RuleError> {
        if entries.is_empty() {
            return Err(RuleError::Empty);
        }
        Ok(Self { kind, entries })
    }

    /// The entry kind this rule is tagged with.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The entries, in source file order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}
