//! Command execution

use granular_core::CommandResult;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs one git invocation and reports its outcome.
///
/// Implementations never fail: a non-zero exit or a spawn error is turned
/// into an unsuccessful [`CommandResult`] and reported to the operator.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> CommandResult;
}

/// Runs the `git` executable in a fixed working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(work_dir: P) -> Self {
        Self {
            program: "git".to_string(),
            work_dir: work_dir.as_ref().to_path_buf(),
        }
    }

    /// Overrides the executable (e.g. an absolute path to git).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }
}

impl CommandRunner for GitCli {
    fn run(&self, args: &[&str]) -> CommandResult {
        let command_line = self.command_line(args);
        log::debug!("Running `{}` in {:?}", command_line, self.work_dir);

        // No timeout: a git process that never exits blocks the run.
        let out = match Command::new(&self.program)
            .args(args)
            .current_dir(&self.work_dir)
            .output()
        {
            Ok(out) => out,
            Err(e) => {
                log::error!("Error running command: {}", command_line);
                log::error!("Failed to start {}: {}", self.program, e);
                return CommandResult::failure(e.to_string());
            }
        };

        let stderr = String::from_utf8_lossy(&out.stderr).into_owned();
        if !out.status.success() {
            log::error!("Error running command: {} ({})", command_line, out.status);
            if !stderr.trim().is_empty() {
                log::error!("{}", stderr.trim_end());
            }
            return CommandResult::failure(stderr);
        }

        let mut result = CommandResult::success(String::from_utf8_lossy(&out.stdout));
        result.stderr = stderr;
        result
    }
}
