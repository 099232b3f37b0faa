//! Symlink manager for a fixed set of dotfiles.
//!
//! A compiled-in [`config::MappingTable`] pairs file names in a source
//! directory with dotted names in the home directory.  The
//! [`manager::LinkManager`] reports on, creates, and removes the links
//! between them, never touching anything it did not create.
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: the mapping table and its validation
//! - **[`paths`]** and **[`operations`]**: environment and filesystem seams
//! - **[`resources`]**: the per-entry symlink check and apply primitives
//! - **[`manager`]**: `status`, `link` and `unlink` over the whole table
//! - **[`report`]**: console and JSON presentation of outcomes
//! - **[`commands`]**: top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod operations;
pub mod paths;
pub mod report;
pub mod resources;
