//! The link manager: `status`, `link` and `unlink` over a mapping table.
//!
//! Each operation resolves the source and home directories once, then walks
//! the table in order.  Every entry yields exactly one [`EntryReport`]; a
//! failure on one entry never stops the others.  Only a [`ConfigError`]
//! (no home directory, unreadable working directory) aborts an operation.
mod link;
pub mod outcome;
mod status;
mod unlink;

pub use outcome::{EntryReport, Operation, Outcome};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::MappingTable;
use crate::error::ConfigError;
use crate::operations::{FileSystemOps, SystemFileSystemOps};
use crate::paths::{Environment, PathResolver, SystemEnvironment};
use crate::report::Reporter;
use crate::resources::symlink::SymlinkResource;

/// Creates, inspects and removes the links described by a [`MappingTable`].
pub struct LinkManager {
    table: MappingTable,
    env: Arc<dyn Environment>,
    fs_ops: Arc<dyn FileSystemOps>,
    source_dir: Option<PathBuf>,
    dry_run: bool,
}

impl std::fmt::Debug for LinkManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkManager")
            .field("table", &self.table)
            .field("env", &"<dyn Environment>")
            .field("fs_ops", &"<dyn FileSystemOps>")
            .field("source_dir", &self.source_dir)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl LinkManager {
    /// Create a manager over `table` using the real environment and filesystem.
    #[must_use]
    pub fn new(table: MappingTable) -> Self {
        Self {
            table,
            env: Arc::new(SystemEnvironment),
            fs_ops: Arc::new(SystemFileSystemOps),
            source_dir: None,
            dry_run: false,
        }
    }

    /// Replace the environment used to find the home and working directories.
    #[must_use]
    pub fn with_environment(mut self, env: Arc<dyn Environment>) -> Self {
        self.env = env;
        self
    }

    /// Replace the filesystem implementation.
    #[must_use]
    pub fn with_fs_ops(mut self, fs_ops: Arc<dyn FileSystemOps>) -> Self {
        self.fs_ops = fs_ops;
        self
    }

    /// Read sources from `dir` instead of the current working directory.
    #[must_use]
    pub fn with_source_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.source_dir = dir;
        self
    }

    /// Report what `link`/`unlink` would change without changing it.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether `link` and `unlink` only report what they would change.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// The mapping table this manager operates on.
    #[must_use]
    pub const fn table(&self) -> &MappingTable {
        &self.table
    }

    /// Run `operation` over every entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the source or home directory cannot be
    /// determined; no entry is processed in that case.
    pub fn run(
        &self,
        operation: Operation,
        reporter: &dyn Reporter,
    ) -> Result<Vec<EntryReport>, ConfigError> {
        let resolver = PathResolver::from_env(self.env.as_ref(), self.source_dir.as_deref())?;
        tracing::debug!(
            "{operation}: source dir {}, home dir {}",
            resolver.source_dir().display(),
            resolver.home_dir().display()
        );
        reporter.begin(operation, &resolver);

        let fs = self.fs_ops.as_ref();
        let mut reports = Vec::with_capacity(self.table.len());
        for (index, entry) in self.table.entries().iter().enumerate() {
            let paths = resolver.resolve(entry);
            let resource = SymlinkResource::new(paths.clone());
            tracing::debug!("checking {}", resource.description());

            let outcome = match operation {
                Operation::Status => status::check(&resource, fs),
                Operation::Link => link::apply(&resource, fs, self.dry_run),
                Operation::Unlink => unlink::apply(&resource, fs, self.dry_run),
            };

            let report =
                EntryReport::new(operation, index, entry, paths.source, paths.dest, outcome);
            reporter.report(&report);
            reports.push(report);
        }

        reporter.finish(operation, &reports);
        Ok(reports)
    }

    /// Classify every destination.  Never mutates the filesystem.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn status(&self, reporter: &dyn Reporter) -> Result<Vec<EntryReport>, ConfigError> {
        self.run(Operation::Status, reporter)
    }

    /// Create every missing link whose source exists.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn link(&self, reporter: &dyn Reporter) -> Result<Vec<EntryReport>, ConfigError> {
        self.run(Operation::Link, reporter)
    }

    /// Remove every link that points exactly at its source.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn unlink(&self, reporter: &dyn Reporter) -> Result<Vec<EntryReport>, ConfigError> {
        self.run(Operation::Unlink, reporter)
    }
}
