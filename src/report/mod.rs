//! Presentation of per-entry outcomes.
//!
//! The manager emits structured [`EntryReport`]s; a [`Reporter`] decides how
//! they are shown.  [`ConsoleReporter`] logs colored lines and a summary,
//! [`JsonReporter`] writes one JSON object per line.
mod console;
mod json;

pub use console::{ConsoleReporter, render_line};
pub use json::JsonReporter;

use crate::manager::{EntryReport, Operation};
use crate::paths::PathResolver;

/// Receives the outcomes of an operation as they happen.
pub trait Reporter {
    /// Called once the directories are resolved, before the first entry.
    fn begin(&self, _operation: Operation, _resolver: &PathResolver) {}

    /// Called exactly once per mapping entry, in table order.
    fn report(&self, report: &EntryReport);

    /// Called after the last entry.
    fn finish(&self, _operation: Operation, _reports: &[EntryReport]) {}
}
