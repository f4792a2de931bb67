//! Command implementations

mod commit_each;

pub use commit_each::cmd_commit_each;
