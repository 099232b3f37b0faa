//! The mapping table: which source files are linked to which home paths.
pub mod mappings;
pub mod validation;

use serde::Serialize;

use crate::error::ConfigError;

/// One source → destination pair.
///
/// `source` is relative to the source directory, `dest` relative to the home
/// directory.  Both are non-empty relative paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    /// Relative path under the source directory.
    pub source: String,
    /// Relative path under the home directory.
    pub dest: String,
}

impl MappingEntry {
    /// Create an entry without validating it.
    #[must_use]
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// Ordered, read-only list of [`MappingEntry`] values.
///
/// Passed explicitly into [`LinkManager`](crate::manager::LinkManager); there
/// is no process-wide table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// Build a table, rejecting entries that are empty, absolute, or escape
    /// their base directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEntry`] for the first offending entry.
    pub fn new(entries: Vec<MappingEntry>) -> Result<Self, ConfigError> {
        for (index, entry) in entries.iter().enumerate() {
            validation::check_entry(index, entry)?;
        }
        Ok(Self { entries })
    }

    /// The table compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: mappings::BUILTIN
                .iter()
                .map(|(source, dest)| MappingEntry::new(*source, *dest))
                .collect(),
        }
    }

    /// Entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MappingTable {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
