//! Filesystem operation abstractions for dependency injection.
//!
//! Provides the [`FileSystemOps`] trait so that the link manager can be
//! unit-tested without touching the real filesystem.  Production code uses
//! [`SystemFileSystemOps`]; tests use a `mockall` mock.

use std::io;
use std::path::{Path, PathBuf};

/// Type of a filesystem entry as seen *without* following a final symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A symbolic link (possibly dangling).
    Symlink,
    /// Anything else: regular file, directory, device, ...
    Other,
}

/// Abstraction over the filesystem calls the link manager makes.
pub trait FileSystemOps: Send + Sync {
    /// Whether `path` exists, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error when existence cannot be determined (permission
    /// denied, a symlink loop, ...); a plain "not found" is `Ok(false)`.
    fn try_exists(&self, path: &Path) -> io::Result<bool>;

    /// Classify `path` without following a final symlink.
    ///
    /// Returns `Ok(None)` when nothing exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns any error other than "not found" (permission denied, a
    /// non-directory path component, ...).
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Read the target of the symbolic link at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is not a symlink or cannot be read.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Create every missing directory in `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create a symlink at `link` pointing to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` already exists or cannot be written.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Remove the symlink at `path` (the link itself, never its target).
    ///
    /// # Errors
    ///
    /// Returns an error if removal fails.
    fn remove_symlink(&self, path: &Path) -> io::Result<()>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn try_exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        match std::fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => Ok(Some(EntryKind::Symlink)),
            Ok(_) => Ok(Some(EntryKind::Other)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(target, link)
        }

        #[cfg(windows)]
        {
            if target.is_dir() {
                std::os::windows::fs::symlink_dir(target, link)
            } else {
                std::os::windows::fs::symlink_file(target, link)
            }
        }
    }

    fn remove_symlink(&self, path: &Path) -> io::Result<()> {
        let meta = std::fs::symlink_metadata(path)?;
        if is_dir_like(&meta) {
            std::fs::remove_dir(path)
        } else {
            std::fs::remove_file(path)
        }
    }
}

/// Check if metadata represents a directory-like entry.
///
/// On Windows, directory symlinks must be removed with `remove_dir`, and
/// `symlink_metadata().is_dir()` returns `false` for them, so the raw
/// `FILE_ATTRIBUTE_DIRECTORY` bit is checked instead.  Elsewhere a symlink
/// is always removed with `remove_file`.
fn is_dir_like(meta: &std::fs::Metadata) -> bool {
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        meta.file_attributes() & 0x10 != 0 // FILE_ATTRIBUTE_DIRECTORY
    }
    #[cfg(not(windows))]
    {
        meta.is_dir()
    }
}


#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let kind = SystemFileSystemOps
            .entry_kind(&dir.path().join("missing"))
            .unwrap();
        assert_eq!(kind, None);
    }

    #[test]
    fn entry_kind_regular_file_is_other() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "x").unwrap();
        assert_eq!(
            SystemFileSystemOps.entry_kind(&file).unwrap(),
            Some(EntryKind::Other)
        );
    }

    #[test]
    fn entry_kind_directory_is_other() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            SystemFileSystemOps.entry_kind(dir.path()).unwrap(),
            Some(EntryKind::Other)
        );
    }

    #[cfg(unix)]
    #[test]
    fn entry_kind_dangling_symlink_is_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink("/nonexistent/target", &link).unwrap();
        assert_eq!(
            SystemFileSystemOps.entry_kind(&link).unwrap(),
            Some(EntryKind::Symlink)
        );
        assert!(
            !SystemFileSystemOps.try_exists(&link).unwrap(),
            "try_exists follows the link"
        );
    }

    #[cfg(unix)]
    #[test]
    fn try_exists_reports_symlink_loop_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("loop");
        std::os::unix::fs::symlink(&link, &link).unwrap();
        assert!(SystemFileSystemOps.try_exists(&link).is_err());
    }

    #[test]
    fn try_exists_missing_is_false() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!SystemFileSystemOps.try_exists(&dir.path().join("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn entry_kind_through_a_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "x").unwrap();
        // A regular file used as a directory component yields ENOTDIR, not ENOENT.
        let err = SystemFileSystemOps
            .entry_kind(&file.join("child"))
            .unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_then_remove_leaves_target_intact() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        std::fs::write(&target, "keep me").unwrap();

        SystemFileSystemOps.symlink(&target, &link).unwrap();
        assert_eq!(SystemFileSystemOps.read_link(&link).unwrap(), target);

        SystemFileSystemOps.remove_symlink(&link).unwrap();
        assert!(link.symlink_metadata().is_err());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep me");
    }

    #[cfg(unix)]
    #[test]
    fn remove_symlink_to_directory_keeps_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target_dir");
        let link = dir.path().join("link");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("inner"), "x").unwrap();
        SystemFileSystemOps.symlink(&target, &link).unwrap();

        SystemFileSystemOps.remove_symlink(&link).unwrap();
        assert!(target.join("inner").exists());
    }

    #[test]
    fn create_dir_all_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        SystemFileSystemOps.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
