//! Link removal for one entry.
use super::Outcome;
use crate::operations::FileSystemOps;
use crate::resources::LinkState;
use crate::resources::symlink::SymlinkResource;

/// Remove the destination only if it is a link to exactly the expected source.
pub(super) fn apply(resource: &SymlinkResource, fs: &dyn FileSystemOps, dry_run: bool) -> Outcome {
    let state = match resource.current_state(fs) {
        Ok(state) => state,
        Err(e) => {
            return Outcome::ProbeError {
                error: e.to_string(),
            };
        }
    };

    match state {
        LinkState::Absent => Outcome::AlreadyAbsent,
        LinkState::RegularFileExists | LinkState::LinkedElsewhere { .. } => {
            Outcome::NotManagedSkipped
        }
        LinkState::LinkedCorrectly if dry_run => Outcome::WouldRemove,
        LinkState::LinkedCorrectly => match resource.remove(fs) {
            Ok(()) => Outcome::Removed,
            Err(e) => {
                tracing::debug!("cannot remove {}: {e}", e.path().display());
                Outcome::RemoveFailed {
                    error: e.to_string(),
                }
            }
        },
    }
}
