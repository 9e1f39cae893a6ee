//! progress-sync: keep a markdown progress tracker in step with completed
//! note files and publish it to git.
//!
//! - [`scan`] collects completed task identifiers from note filenames
//! - [`document`] rewrites row glyphs, section counters and the global summary
//! - [`publish`] stages, commits and pushes through [`git`]
//! - [`commands`] wires the three together behind the CLI

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod git;
pub mod publish;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Result, SyncError};
