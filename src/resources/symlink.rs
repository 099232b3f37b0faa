//! Symlink resource.
use std::path::Path;

use super::LinkState;
use crate::error::{LinkError, ProbeError};
use crate::operations::{EntryKind, FileSystemOps};
use crate::paths::ResolvedPaths;

/// A managed symlink: `dest` should point at `source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkResource {
    paths: ResolvedPaths,
}

impl SymlinkResource {
    /// Create a resource for one resolved mapping entry.
    #[must_use]
    pub const fn new(paths: ResolvedPaths) -> Self {
        Self { paths }
    }

    /// The source file the link points to.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.paths.source
    }

    /// The path where the link lives.
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.paths.dest
    }

    /// Human-readable description of this resource.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} -> {}", self.dest().display(), self.source().display())
    }

    /// Whether the source exists (following symlinks).
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] when the source cannot be inspected.
    pub fn source_exists(&self, fs: &dyn FileSystemOps) -> Result<bool, ProbeError> {
        let source = self.source();
        fs.try_exists(source).map_err(|e| ProbeError::new(source, e))
    }

    /// Classify the destination.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] for any failure other than "nothing there".
    pub fn current_state(&self, fs: &dyn FileSystemOps) -> Result<LinkState, ProbeError> {
        let dest = self.dest();
        match fs.entry_kind(dest).map_err(|e| ProbeError::new(dest, e))? {
            None => Ok(LinkState::Absent),
            Some(EntryKind::Other) => Ok(LinkState::RegularFileExists),
            Some(EntryKind::Symlink) => {
                let target = fs.read_link(dest).map_err(|e| ProbeError::new(dest, e))?;
                if targets_equal(&target, self.source()) {
                    Ok(LinkState::LinkedCorrectly)
                } else {
                    Ok(LinkState::LinkedElsewhere { target })
                }
            }
        }
    }

    /// Create the link.
    ///
    /// Missing directories between the home directory and `dest` are created
    /// first, but only when the home directory itself exists; a missing home
    /// makes the symlink call fail with the OS error.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Create`] with the raw OS error.
    pub fn create(&self, fs: &dyn FileSystemOps) -> Result<(), LinkError> {
        let dest = self.dest();
        let wrap = |source| LinkError::Create {
            path: dest.to_path_buf(),
            source,
        };
        let home = self.paths.home.as_path();
        if let Some(parent) = dest.parent()
            && parent != home
            && parent.starts_with(home)
            && fs.try_exists(home).map_err(wrap)?
        {
            fs.create_dir_all(parent).map_err(wrap)?;
        }
        fs.symlink(self.source(), dest).map_err(wrap)
    }

    /// Remove the link at `dest`.
    ///
    /// Callers must have classified the destination as
    /// [`LinkState::LinkedCorrectly`] first.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Remove`] with the raw OS error.
    pub fn remove(&self, fs: &dyn FileSystemOps) -> Result<(), LinkError> {
        let dest = self.dest();
        fs.remove_symlink(dest).map_err(|source| LinkError::Remove {
            path: dest.to_path_buf(),
            source,
        })
    }
}

/// Compare a link's stored target with the expected source.
///
/// Byte-for-byte; `a/../b` and `b` are different targets.  On Windows the
/// `\\?\` prefix that `read_link` adds to extended-length paths is ignored.
fn targets_equal(target: &Path, source: &Path) -> bool {
    #[cfg(windows)]
    {
        let strip = |p: &Path| -> std::path::PathBuf {
            let s = p.to_string_lossy();
            s.strip_prefix(r"\\?\")
                .map_or_else(|| p.to_path_buf(), std::path::PathBuf::from)
        };
        strip(target).as_os_str() == strip(source).as_os_str()
    }
    #[cfg(not(windows))]
    {
        target.as_os_str() == source.as_os_str()
    }
}
