//! Read-only status check for one entry.
use super::Outcome;
use crate::operations::FileSystemOps;
use crate::resources::symlink::SymlinkResource;

/// Classify the destination; never mutates anything.
pub(super) fn check(resource: &SymlinkResource, fs: &dyn FileSystemOps) -> Outcome {
    match resource.current_state(fs) {
        Ok(state) => Outcome::from_state(state),
        Err(e) => Outcome::ProbeError {
            error: e.to_string(),
        },
    }
}
