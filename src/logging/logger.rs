//! Structured logger with dry-run awareness and summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{EntryRecord, EntryStatus, Log};
use super::utils::log_file_path;

/// Generate [`Log`] trait methods that forward to inherent methods of the
/// same name.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with dry-run awareness and summary collection.
///
/// All messages go through [`tracing`]; the subscriber installed by
/// [`init_subscriber`](super::init_subscriber) writes them to the console and
/// to `$XDG_CACHE_HOME/dotlink/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    entries: Mutex<Vec<EntryRecord>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger.
    ///
    /// Stores the log file path for display in the summary; the file itself
    /// is created by the subscriber's file layer.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<EntryRecord> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record an entry result for the summary.
    pub fn record_entry(&self, name: &str, status: EntryStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(EntryRecord {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the number of failed entries.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.entries.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|e| e.status == EntryStatus::Failed)
                .count()
        })
    }

    /// Print the one-line summary of all recorded entries.
    pub fn print_summary(&self) {
        let entries = self.entries();
        if entries.is_empty() {
            return;
        }

        let mut ok = 0u32;
        let mut skipped = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;
        for entry in &entries {
            match entry.status {
                EntryStatus::Ok => ok += 1,
                EntryStatus::Skipped => skipped += 1,
                EntryStatus::DryRun => dry_run += 1,
                EntryStatus::Failed => failed += 1,
            }
        }

        let total = ok + skipped + dry_run + failed;
        self.stage("Summary");
        self.info(&format!(
            "{total} entries: \x1b[32m{ok} ok\x1b[0m, \x1b[33m{skipped} skipped\x1b[0m, \x1b[37m{dry_run} dry-run\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_entry(&self, name: &str, status: EntryStatus, message: Option<&str>) {
        self.record_entry(name, status, message);
    }

    fn print_summary(&self) {
        self.print_summary();
    }
}
