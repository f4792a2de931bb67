//! Core data models passed between the status reader and the commit driver

use std::fmt;

/// One parsed line of `git status --porcelain` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Two-character status code (e.g. " M", "??", "R "). Not interpreted.
    pub status_code: String,

    /// Affected path, unquoted, destination side of a rename
    pub path: String,
}

impl ChangeRecord {
    pub fn new(status_code: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            status_code: status_code.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code, self.path)
    }
}

/// Outcome of running one external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Captured standard output, trailing whitespace trimmed
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Whether the command exited with status zero
    pub success: bool,
}

impl CommandResult {
    /// Successful result; trailing whitespace is trimmed from `stdout`.
    pub fn success(stdout: impl AsRef<str>) -> Self {
        Self {
            stdout: stdout.as_ref().trim_end().to_string(),
            stderr: String::new(),
            success: true,
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// Returns the trimmed output on success, `None` otherwise.
    pub fn into_output(self) -> Option<String> {
        self.success.then_some(self.stdout)
    }
}

/// What happened to a single file during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Staged and committed with the given message
    Committed { message: String },

    /// `git add` failed, no commit was attempted
    StageFailed,

    /// Staged, but the commit with the given message failed
    CommitFailed { message: String },
}

impl FileOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, FileOutcome::Committed { .. })
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileOutcome::Committed { .. } => "committed",
            FileOutcome::StageFailed => "stage failed",
            FileOutcome::CommitFailed { .. } => "commit failed",
        }
    }
}

/// Per-file outcomes of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<(String, FileOutcome)>,
}

impl RunSummary {
    pub fn record(&mut self, path: impl Into<String>, outcome: FileOutcome) {
        self.outcomes.push((path.into(), outcome));
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn committed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_committed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.committed()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
