//! Scripted stand-in for git shared by the integration tests

#![allow(dead_code)]

use granular_core::CommandResult;
use granular_git::CommandRunner;
use std::cell::RefCell;

/// Records every invocation and answers from a script.
///
/// `status` is returned for `git status`; any `add`/`commit` whose path or
/// message is listed in the matching failure set fails, everything else
/// succeeds.
#[derive(Default)]
pub struct FakeGit {
    pub status: Option<String>,
    pub failing_adds: Vec<String>,
    pub failing_commits: Vec<String>,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl FakeGit {
    pub fn with_status(status: &str) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    pub fn calls_to(&self, subcommand: &str) -> Vec<Vec<String>> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.first().map(String::as_str) == Some(subcommand))
            .cloned()
            .collect()
    }
}

impl CommandRunner for FakeGit {
    fn run(&self, args: &[&str]) -> CommandResult {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());

        let last = args.last().copied().unwrap_or_default();
        match args.first().copied() {
            Some("status") => match &self.status {
                Some(out) => CommandResult::success(out),
                None => CommandResult::failure("fatal: not a git repository"),
            },
            Some("add") if self.failing_adds.iter().any(|p| p == last) => {
                CommandResult::failure(format!("fatal: pathspec '{}' did not match any files", last))
            }
            Some("commit") if self.failing_commits.iter().any(|m| m == last) => {
                CommandResult::failure("nothing added to commit")
            }
            _ => CommandResult::success(""),
        }
    }
}
