//! Mapping entry validation.
use std::path::{Component, Path, is_separator};

use super::MappingEntry;
use crate::error::ConfigError;

/// Check both sides of `entry`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEntry`] naming the first invalid side.
pub fn check_entry(index: usize, entry: &MappingEntry) -> Result<(), ConfigError> {
    check_name(&entry.source).map_err(|reason| ConfigError::InvalidEntry {
        index,
        field: "source",
        value: entry.source.clone(),
        reason,
    })?;
    check_name(&entry.dest).map_err(|reason| ConfigError::InvalidEntry {
        index,
        field: "dest",
        value: entry.dest.clone(),
        reason,
    })
}

/// A name must be a non-empty path made only of normal components.
fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("must not be empty");
    }
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => {}
            Component::Prefix(_) | Component::RootDir => return Err("must be relative"),
            Component::ParentDir => return Err("must not contain '..'"),
            Component::CurDir => return Err("must not contain '.' segments"),
        }
    }
    // `components()` drops interior `.` segments, so check the raw text.
    if name.split(is_separator).any(|segment| segment == ".") {
        return Err("must not contain '.' segments");
    }
    Ok(())
}
