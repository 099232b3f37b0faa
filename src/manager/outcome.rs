//! Per-entry outcomes and reports.
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::MappingEntry;
use crate::logging::EntryStatus;
use crate::resources::LinkState;

/// Which operation produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Read-only classification.
    Status,
    /// Create missing links.
    Link,
    /// Remove managed links.
    Unlink,
}

impl Operation {
    /// Command-line name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Link => "link",
            Self::Unlink => "unlink",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What happened to one entry.
///
/// Serialized with an `outcome` tag holding the label, e.g.
/// `{"outcome":"FAILED","error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Status: nothing at the destination.
    NotFound,
    /// Status: the destination links to the source.
    LinkedCorrectly,
    /// Status: the destination links somewhere else.
    LinkedElsewhere {
        /// The link's current target.
        target: PathBuf,
    },
    /// Status: the destination is not a link.
    RegularFileExists,
    /// Link: the source does not exist.
    SourceMissing,
    /// Link: something already occupies the destination.
    DestExistsSkipped,
    /// Link: the link was created.
    Created,
    /// Link (dry run): the link would be created.
    WouldCreate,
    /// Link: creating the link failed.
    Failed {
        /// Underlying error message.
        error: String,
    },
    /// Unlink: nothing at the destination.
    AlreadyAbsent,
    /// Unlink: the managed link was removed.
    Removed,
    /// Unlink (dry run): the managed link would be removed.
    WouldRemove,
    /// Unlink: removing the link failed.
    RemoveFailed {
        /// Underlying error message.
        error: String,
    },
    /// Unlink: the destination is not a link this tool created.
    NotManagedSkipped,
    /// Any operation: the destination could not be inspected.
    ProbeError {
        /// Underlying error message.
        error: String,
    },
}

impl Outcome {
    /// The status outcome for a classified destination.
    #[must_use]
    pub fn from_state(state: LinkState) -> Self {
        match state {
            LinkState::Absent => Self::NotFound,
            LinkState::LinkedCorrectly => Self::LinkedCorrectly,
            LinkState::LinkedElsewhere { target } => Self::LinkedElsewhere { target },
            LinkState::RegularFileExists => Self::RegularFileExists,
        }
    }

    /// Report label, e.g. `DEST_EXISTS_SKIPPED`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::LinkedCorrectly => "LINKED_CORRECTLY",
            Self::LinkedElsewhere { .. } => "LINKED_ELSEWHERE",
            Self::RegularFileExists => "REGULAR_FILE_EXISTS",
            Self::SourceMissing => "SOURCE_MISSING",
            Self::DestExistsSkipped => "DEST_EXISTS_SKIPPED",
            Self::Created => "CREATED",
            Self::WouldCreate => "WOULD_CREATE",
            Self::Failed { .. } => "FAILED",
            Self::AlreadyAbsent => "ALREADY_ABSENT",
            Self::Removed => "REMOVED",
            Self::WouldRemove => "WOULD_REMOVE",
            Self::RemoveFailed { .. } => "REMOVE_FAILED",
            Self::NotManagedSkipped => "NOT_MANAGED_SKIPPED",
            Self::ProbeError { .. } => "PROBE_ERROR",
        }
    }

    /// Extra detail shown after the label, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::LinkedElsewhere { target } => Some(format!("points to {}", target.display())),
            Self::Failed { error } | Self::RemoveFailed { error } | Self::ProbeError { error } => {
                Some(error.clone())
            }
            _ => None,
        }
    }

    /// Coarse status used for the summary and console coloring.
    #[must_use]
    pub const fn status(&self) -> EntryStatus {
        match self {
            Self::LinkedCorrectly | Self::Created | Self::AlreadyAbsent | Self::Removed => {
                EntryStatus::Ok
            }
            Self::NotFound
            | Self::LinkedElsewhere { .. }
            | Self::RegularFileExists
            | Self::SourceMissing
            | Self::DestExistsSkipped
            | Self::NotManagedSkipped => EntryStatus::Skipped,
            Self::WouldCreate | Self::WouldRemove => EntryStatus::DryRun,
            Self::Failed { .. } | Self::RemoveFailed { .. } | Self::ProbeError { .. } => {
                EntryStatus::Failed
            }
        }
    }
}

/// One report line: an entry, its resolved paths, and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Operation that produced the report.
    pub operation: Operation,
    /// Position of the entry in the mapping table.
    pub index: usize,
    /// Source name from the mapping table.
    pub source: String,
    /// Destination name from the mapping table.
    pub dest: String,
    /// Resolved source path.
    pub source_path: PathBuf,
    /// Resolved destination path.
    pub dest_path: PathBuf,
    /// What happened.
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl EntryReport {
    /// Build a report for `entry`.
    #[must_use]
    pub fn new(
        operation: Operation,
        index: usize,
        entry: &MappingEntry,
        source_path: PathBuf,
        dest_path: PathBuf,
        outcome: Outcome,
    ) -> Self {
        Self {
            operation,
            index,
            source: entry.source.clone(),
            dest: entry.dest.clone(),
            source_path,
            dest_path,
            outcome,
        }
    }

    /// `source -> dest` using the table names.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} -> {}", self.source, self.dest)
    }
}
