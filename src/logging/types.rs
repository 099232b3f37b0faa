//! Core logging types: per-entry records, status, and the [`Log`] trait.

/// Result of one mapping entry, kept for summary reporting.
#[derive(Debug, Clone)]
pub struct EntryRecord {
    /// Entry name as shown in the summary (`source -> dest`).
    pub name: String,
    /// Coarse status of the entry.
    pub status: EntryStatus,
    /// Optional detail message (outcome label, error description).
    pub message: Option<String>,
}

/// Coarse status of a processed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// The entry is (now) in the desired state.
    Ok,
    /// The entry was left alone: source missing, destination occupied or not ours.
    Skipped,
    /// Dry run; the change was only reported.
    DryRun,
    /// A filesystem call failed for this entry.
    Failed,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) implements it for real output; reporters
/// take a `&dyn Log` so tests can capture what would be printed.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record an entry result for the summary.
    fn record_entry(&self, name: &str, status: EntryStatus, message: Option<&str>);
    /// Emit the summary of recorded entries.
    fn print_summary(&self) {}
}
