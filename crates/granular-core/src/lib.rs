//! Granular Core - Shared data models and status parsing
//!
//! This crate defines the records passed between the status reader and the
//! commit driver, the porcelain status-line parser and the rule that derives
//! a commit message from a path.

mod error;
mod message;
mod models;
mod status;

pub use error::CoreError;
pub use message::commit_message;
pub use models::{ChangeRecord, CommandResult, FileOutcome, RunSummary};
pub use status::{PorcelainFormat, DEFAULT_PATH_OFFSET, RENAME_SEPARATOR};
