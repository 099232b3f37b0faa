//! Colored console report backed by the [`Log`] abstraction.
use super::Reporter;
use crate::logging::{EntryStatus, Log};
use crate::manager::{EntryReport, Operation};
use crate::paths::PathResolver;

/// Render the plain report line for one entry.
///
/// The label is left-aligned in a 20-column field, followed by the table
/// names and, for outcomes that carry one, a detail after a colon.
#[must_use]
pub fn render_line(report: &EntryReport) -> String {
    let label = report.outcome.label();
    match report.outcome.detail() {
        Some(detail) => format!("{label:<20} {}: {detail}", report.name()),
        None => format!("{label:<20} {}", report.name()),
    }
}

/// Wrap the leading label of a rendered line in the color for `status`.
fn colorize(line: &str, label: &str, status: EntryStatus) -> String {
    let color = match status {
        EntryStatus::Ok => "32",
        EntryStatus::Skipped => "33",
        EntryStatus::DryRun => "36",
        EntryStatus::Failed => "31",
    };
    line.strip_prefix(label).map_or_else(
        || line.to_string(),
        |rest| format!("\x1b[{color}m{label}\x1b[0m{rest}"),
    )
}

/// Writes one log line per entry and a summary at the end.
///
/// Failures go to [`Log::error`], dry-run outcomes to [`Log::dry_run`], the
/// rest to [`Log::info`].  Every entry is also recorded for the summary.
#[derive(Debug)]
pub struct ConsoleReporter<'a, L: Log + ?Sized> {
    log: &'a L,
}

impl<'a, L: Log + ?Sized> ConsoleReporter<'a, L> {
    /// Report through `log`.
    #[must_use]
    pub const fn new(log: &'a L) -> Self {
        Self { log }
    }
}

impl<L: Log + ?Sized> Reporter for ConsoleReporter<'_, L> {
    fn begin(&self, operation: Operation, resolver: &PathResolver) {
        self.log.stage(&format!(
            "{operation}: {} -> {}",
            resolver.source_dir().display(),
            resolver.home_dir().display()
        ));
    }

    fn report(&self, report: &EntryReport) {
        let label = report.outcome.label();
        let status = report.outcome.status();
        let line = colorize(&render_line(report), label, status);
        match status {
            EntryStatus::Failed => self.log.error(&line),
            EntryStatus::DryRun => self.log.dry_run(&line),
            EntryStatus::Ok | EntryStatus::Skipped => self.log.info(&line),
        }
        self.log.debug(&format!(
            "{} -> {}",
            report.dest_path.display(),
            report.source_path.display()
        ));
        self.log
            .record_entry(&report.name(), status, Some(label));
    }

    fn finish(&self, _operation: Operation, _reports: &[EntryReport]) {
        self.log.print_summary();
    }
}
