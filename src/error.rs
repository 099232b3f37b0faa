//! Domain-specific error types for the link manager.
//!
//! Library code returns these typed errors; the binary converts them to
//! [`anyhow::Error`] at the command boundary via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotlinkError
//! ├── Config(ConfigError): home/source directory, mapping table (fatal)
//! ├── Probe(ProbeError):   unexpected failure inspecting a destination
//! └── Link(LinkError):     symlink creation or removal failed
//! ```
//!
//! Only [`ConfigError`] aborts a whole operation.  The other two are caught
//! at the per-entry boundary and turned into a report line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the link manager.
#[derive(Error, Debug)]
pub enum DotlinkError {
    /// Configuration error (home directory, source directory, mapping table).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A filesystem query failed for a reason other than "not found".
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// A filesystem mutation failed.
    #[error("Link error: {0}")]
    Link(#[from] LinkError),
}

/// Errors that prevent an operation from producing any paths at all.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither of the home directory variables holds a non-empty value.
    #[error("home directory not set: neither {primary} nor {fallback} has a value")]
    HomeNotFound {
        /// Variable checked first.
        primary: &'static str,
        /// Variable checked second.
        fallback: &'static str,
    },

    /// The current working directory (the default source directory) is unreadable.
    #[error("cannot determine source directory: {source}")]
    CurrentDir {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A mapping table entry is not a non-empty relative path.
    #[error("invalid mapping entry #{index} ({field} = '{value}'): {reason}")]
    InvalidEntry {
        /// Position of the entry in the table.
        index: usize,
        /// Which side of the pair is invalid (`source` or `dest`).
        field: &'static str,
        /// The offending value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// A destination could not be classified.
#[derive(Error, Debug)]
#[error("cannot inspect {}: {source}", path.display())]
pub struct ProbeError {
    /// Path that was being inspected.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: io::Error,
}

impl ProbeError {
    /// Wrap an I/O error raised while inspecting `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// A symlink could not be created or removed.
#[derive(Error, Debug)]
pub enum LinkError {
    /// `symlink(2)` (or the parent directory creation before it) failed.
    #[error("{source}")]
    Create {
        /// Link path that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Removing the link failed.
    #[error("{source}")]
    Remove {
        /// Link path that could not be removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl LinkError {
    /// Path of the link the failed mutation targeted.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Create { path, .. } | Self::Remove { path, .. } => path,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // ConfigError
    // -----------------------------------------------------------------------

    #[test]
    fn home_not_found_names_both_variables() {
        let e = ConfigError::HomeNotFound {
            primary: "HOME",
            fallback: "USERPROFILE",
        };
        assert_eq!(
            e.to_string(),
            "home directory not set: neither HOME nor USERPROFILE has a value"
        );
    }

    #[test]
    fn current_dir_has_source() {
        use std::error::Error as StdError;
        let e = ConfigError::CurrentDir {
            source: io::Error::new(io::ErrorKind::NotFound, "cwd removed"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("cwd removed"));
    }

    #[test]
    fn invalid_entry_display() {
        let e = ConfigError::InvalidEntry {
            index: 2,
            field: "dest",
            value: "/etc/passwd".to_string(),
            reason: "must be relative",
        };
        assert_eq!(
            e.to_string(),
            "invalid mapping entry #2 (dest = '/etc/passwd'): must be relative"
        );
    }

    // -----------------------------------------------------------------------
    // ProbeError / LinkError
    // -----------------------------------------------------------------------

    #[test]
    fn inspect_error_display_includes_path() {
        let e = ProbeError::new(
            "/home/user/.bashrc",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            e.to_string(),
            "cannot inspect /home/user/.bashrc: permission denied"
        );
    }

    #[test]
    fn link_error_displays_raw_message() {
        let e = LinkError::Create {
            path: PathBuf::from("/home/user/.vimrc"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "File exists (os error 17)"),
        };
        assert_eq!(e.to_string(), "File exists (os error 17)");
        assert_eq!(e.path(), std::path::Path::new("/home/user/.vimrc"));
    }

    #[test]
    fn dotlink_error_from_config_error() {
        let e: DotlinkError = ConfigError::HomeNotFound {
            primary: "HOME",
            fallback: "USERPROFILE",
        }
        .into();
        assert!(e.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn dotlink_error_from_link_error() {
        let e: DotlinkError = LinkError::Remove {
            path: PathBuf::from("x"),
            source: io::Error::other("busy"),
        }
        .into();
        assert_eq!(e.to_string(), "Link error: busy");
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<DotlinkError>();
        assert_send_sync::<ConfigError>();
        assert_send_sync::<ProbeError>();
        assert_send_sync::<LinkError>();
    }

    #[test]
    fn config_error_converts_to_anyhow() {
        let e = ConfigError::CurrentDir {
            source: io::Error::other("gone"),
        };
        let _anyhow_err: anyhow::Error = e.into();
    }
}
