//! Top-level subcommand orchestration.
pub mod link;
pub mod status;
pub mod unlink;
pub mod version;

use anyhow::{Context as _, Result};

use crate::cli::GlobalOpts;
use crate::config::MappingTable;
use crate::error::DotlinkError;
use crate::logging::Log;
use crate::manager::{EntryReport, LinkManager, Operation};
use crate::report::{ConsoleReporter, JsonReporter};

/// Build a manager over the built-in table, configured from the global flags.
#[must_use]
pub fn manager_for(global: &GlobalOpts) -> LinkManager {
    LinkManager::new(MappingTable::builtin())
        .with_source_dir(global.root.clone())
        .with_dry_run(global.dry_run)
}

/// Run `operation` and report through the console or as JSON on stdout.
///
/// Per-entry failures are reported, not returned; the summary counts them.
///
/// # Errors
///
/// Returns an error if the source or home directory cannot be determined.
pub fn run_operation(
    manager: &LinkManager,
    operation: Operation,
    json: bool,
    log: &dyn Log,
) -> Result<Vec<EntryReport>> {
    log.debug(&format!(
        "{operation}: {} entries, dry run {}",
        manager.table().len(),
        manager.is_dry_run()
    ));

    let reports = if json {
        let reporter = JsonReporter::new(std::io::stdout().lock());
        manager.run(operation, &reporter)
    } else {
        manager.run(operation, &ConsoleReporter::new(log))
    }
    .map_err(DotlinkError::from)
    .with_context(|| format!("cannot run {operation}"))?;

    Ok(reports)
}
