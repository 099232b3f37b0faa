//! Unlink command implementation.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::manager::{Operation, Outcome};

/// Run the unlink command.
///
/// Only links pointing exactly at their source are removed.
///
/// # Errors
///
/// Returns an error if the source or home directory cannot be determined.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let manager = super::manager_for(global);
    let reports = super::run_operation(&manager, Operation::Unlink, global.json, log)?;
    let kept = reports
        .iter()
        .filter(|r| r.outcome == Outcome::NotManagedSkipped)
        .count();
    if kept > 0 {
        log.debug(&format!("{kept} destination(s) not created by dotlink were left in place"));
    }
    Ok(())
}
