//! Granular Git - Runs git to turn pending changes into per-file commits
//!
//! This crate is responsible for:
//! - Running git commands and capturing their output
//! - Reading the list of changed files from `git status --porcelain`
//! - Staging and committing each file on its own

mod driver;
mod executor;
mod reader;

pub use driver::{commit_each, Progress};
pub use executor::{CommandRunner, GitCli};
pub use reader::read_changes;
