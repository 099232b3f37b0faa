// Shared helpers for integration tests.
//
// Provides a pair of temporary directories standing in for the dotfiles
// source directory and the home directory, plus a fluent builder so each
// test can lay out its starting state without filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dotlink::config::{MappingEntry, MappingTable};
use dotlink::manager::{EntryReport, LinkManager, Operation};
use dotlink::paths::{Environment, HOME_VARS};
use dotlink::report::Reporter;

/// Environment with a fixed home and working directory.
#[derive(Debug)]
pub struct FixedEnvironment {
    home: PathBuf,
    cwd: PathBuf,
}

impl Environment for FixedEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        (key == HOME_VARS[0]).then(|| self.home.to_string_lossy().into_owned())
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.clone())
    }
}

/// Reporter that discards everything; tests inspect the returned reports.
#[derive(Debug)]
pub struct Quiet;

impl Reporter for Quiet {
    fn report(&self, _report: &EntryReport) {}
}

/// Isolated source and home directories backed by [`tempfile::TempDir`].
///
/// Both directories are deleted when the context is dropped.
pub struct IntegrationTestContext {
    /// Directory the mapping's source names resolve against.
    pub src: tempfile::TempDir,
    /// Directory standing in for `$HOME`.
    pub home: tempfile::TempDir,
    entries: Vec<MappingEntry>,
}

impl IntegrationTestContext {
    /// Path of a source file.
    pub fn source(&self, name: &str) -> PathBuf {
        self.src.path().join(name)
    }

    /// Path of a destination in the home directory.
    pub fn dest(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// A manager over the context's mapping, rooted in its directories.
    pub fn manager(&self) -> LinkManager {
        self.manager_with_home(self.home.path())
    }

    /// Like [`manager`](Self::manager), but with `home` as the home directory.
    pub fn manager_with_home(&self, home: &Path) -> LinkManager {
        let table = MappingTable::new(self.entries.clone()).expect("valid mapping table");
        LinkManager::new(table).with_environment(Arc::new(FixedEnvironment {
            home: home.to_path_buf(),
            cwd: self.src.path().to_path_buf(),
        }))
    }

    /// Run `operation` and return the outcome labels in table order.
    pub fn labels(&self, operation: Operation) -> Vec<&'static str> {
        self.run(operation)
            .iter()
            .map(|r| r.outcome.label())
            .collect()
    }

    /// Run `operation` and return the reports.
    pub fn run(&self, operation: Operation) -> Vec<EntryReport> {
        self.manager()
            .run(operation, &Quiet)
            .expect("operation should not abort")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin with empty source and home directories and an empty mapping.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext {
                src: tempfile::tempdir().expect("create source dir"),
                home: tempfile::tempdir().expect("create home dir"),
                entries: Vec::new(),
            },
        }
    }

    /// Append `(source, dest)` to the mapping table.
    pub fn with_entry(mut self, source: &str, dest: &str) -> Self {
        self.ctx.entries.push(MappingEntry::new(source, dest));
        self
    }

    /// Create a source file with `content`.
    pub fn with_source(self, name: &str, content: &str) -> Self {
        std::fs::write(self.ctx.source(name), content).expect("write source file");
        self
    }

    /// Place a regular file at a destination.
    pub fn with_dest_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.ctx.dest(name), content).expect("write destination file");
        self
    }

    /// Place a symbolic link at a destination pointing at `target`.
    #[cfg(unix)]
    pub fn with_dest_link(self, name: &str, target: &Path) -> Self {
        std::os::unix::fs::symlink(target, self.ctx.dest(name)).expect("create destination link");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
