//! Line-delimited JSON report.
use std::cell::RefCell;
use std::io::Write;

use super::Reporter;
use crate::manager::EntryReport;

/// Writes each [`EntryReport`] as one JSON object per line.
///
/// Write failures are logged and otherwise ignored; they never stop the
/// operation.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> JsonReporter<W> {
    /// Report to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    /// Consume the reporter and return the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&self, report: &EntryReport) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = write_line(&mut *out, report) {
            tracing::warn!("failed to write report for {}: {e}", report.name());
        }
    }
}

fn write_line<W: Write>(out: &mut W, report: &EntryReport) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}
