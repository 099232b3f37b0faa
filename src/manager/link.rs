//! Link creation for one entry.
use super::Outcome;
use crate::operations::FileSystemOps;
use crate::resources::symlink::SymlinkResource;

/// Create the link unless the source is missing or the destination is taken.
///
/// Never overwrites: any entry at the destination, including a dangling
/// link, is left alone.
pub(super) fn apply(resource: &SymlinkResource, fs: &dyn FileSystemOps, dry_run: bool) -> Outcome {
    match resource.source_exists(fs) {
        Ok(true) => {}
        Ok(false) => return Outcome::SourceMissing,
        Err(e) => {
            return Outcome::ProbeError {
                error: e.to_string(),
            };
        }
    }

    match resource.current_state(fs) {
        Ok(state) if state.is_occupied() => return Outcome::DestExistsSkipped,
        Ok(_) => {}
        Err(e) => {
            return Outcome::ProbeError {
                error: e.to_string(),
            };
        }
    }

    if dry_run {
        return Outcome::WouldCreate;
    }

    match resource.create(fs) {
        Ok(()) => Outcome::Created,
        Err(e) => {
            tracing::debug!("cannot create {}: {e}", e.path().display());
            Outcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::EntryKind;
    use crate::operations::test_helpers::MockFileSystem;
    use crate::paths::ResolvedPaths;
    use std::io;
    use std::path::PathBuf;

    fn resource() -> SymlinkResource {
        SymlinkResource::new(ResolvedPaths {
            source: PathBuf::from("/src/a.conf"),
            dest: PathBuf::from("/home/u/.a_conf"),
            home: PathBuf::from("/home/u"),
        })
    }

    #[test]
    fn missing_source_short_circuits() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists().returning(|_| Ok(false));
        fs.expect_entry_kind().never();
        fs.expect_symlink().never();
        assert_eq!(apply(&resource(), &fs, false), Outcome::SourceMissing);
    }

    #[test]
    fn unreadable_source_is_not_reported_missing() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        fs.expect_entry_kind().never();
        fs.expect_symlink().never();
        let outcome = apply(&resource(), &fs, false);
        assert_eq!(outcome.label(), "PROBE_ERROR");
        assert!(outcome.detail().unwrap().contains("/src/a.conf"));
    }

    #[test]
    fn dangling_link_at_dest_is_skipped() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists().returning(|_| Ok(true));
        fs.expect_entry_kind()
            .returning(|_| Ok(Some(EntryKind::Symlink)));
        fs.expect_read_link()
            .returning(|_| Ok(PathBuf::from("/gone")));
        fs.expect_symlink().never();
        assert_eq!(apply(&resource(), &fs, false), Outcome::DestExistsSkipped);
    }

    #[test]
    fn unreadable_dest_skips_creation() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists().returning(|_| Ok(true));
        fs.expect_entry_kind()
            .returning(|_| Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        fs.expect_symlink().never();
        assert_eq!(apply(&resource(), &fs, false).label(), "PROBE_ERROR");
    }

    #[test]
    fn creation_failure_reports_raw_message() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists().returning(|_| Ok(true));
        fs.expect_entry_kind().returning(|_| Ok(None));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_symlink()
            .returning(|_, _| Err(io::Error::other("read-only file system")));
        assert_eq!(
            apply(&resource(), &fs, false),
            Outcome::Failed {
                error: "read-only file system".to_string()
            }
        );
    }

    #[test]
    fn creates_link_from_dest_to_source() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists().returning(|_| Ok(true));
        fs.expect_entry_kind().returning(|_| Ok(None));
        fs.expect_create_dir_all().never();
        fs.expect_symlink()
            .withf(|target, link| {
                target == PathBuf::from("/src/a.conf") && link == PathBuf::from("/home/u/.a_conf")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        assert_eq!(apply(&resource(), &fs, false), Outcome::Created);
    }

    #[test]
    fn dry_run_never_creates() {
        let mut fs = MockFileSystem::new();
        fs.expect_try_exists().returning(|_| Ok(true));
        fs.expect_entry_kind().returning(|_| Ok(None));
        fs.expect_create_dir_all().never();
        fs.expect_symlink().never();
        assert_eq!(apply(&resource(), &fs, true), Outcome::WouldCreate);
    }
}
