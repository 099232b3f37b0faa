//! Link state classification and the symlink resource.
pub mod symlink;

use std::path::PathBuf;

/// State of a destination path relative to its expected source.
///
/// Always computed fresh from the filesystem; never cached.
///
/// # Examples
///
/// ```
/// use dotlink::resources::LinkState;
///
/// assert_eq!(LinkState::Absent.label(), "NOT_FOUND");
/// assert_eq!(LinkState::LinkedCorrectly.label(), "LINKED_CORRECTLY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkState {
    /// Nothing exists at the destination, not even a dangling link.
    Absent,
    /// The destination is a symlink whose target is exactly the source.
    LinkedCorrectly,
    /// The destination is a symlink pointing somewhere else.
    LinkedElsewhere {
        /// The link's current target, as stored in the link.
        target: PathBuf,
    },
    /// The destination exists and is not a symlink.
    RegularFileExists,
}

impl LinkState {
    /// Status label reported by the `status` operation.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Absent => "NOT_FOUND",
            Self::LinkedCorrectly => "LINKED_CORRECTLY",
            Self::LinkedElsewhere { .. } => "LINKED_ELSEWHERE",
            Self::RegularFileExists => "REGULAR_FILE_EXISTS",
        }
    }

    /// Whether anything at all occupies the destination.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        !matches!(self, Self::Absent)
    }
}
