//! Status command implementation.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::manager::Operation;

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the source or home directory cannot be determined.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    if global.dry_run {
        log.debug("--dry-run has no effect on status");
    }
    let manager = super::manager_for(global);
    super::run_operation(&manager, Operation::Status, global.json, log)?;
    Ok(())
}
