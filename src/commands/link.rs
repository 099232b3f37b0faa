//! Link command implementation.
use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::logging::Logger;
use crate::manager::Operation;

/// Run the link command.
///
/// # Errors
///
/// Returns an error if the source or home directory cannot be determined.
pub fn run(global: &GlobalOpts, log: &Logger) -> Result<()> {
    let manager = super::manager_for(global);
    super::run_operation(&manager, Operation::Link, global.json, log)?;
    Ok(())
}
