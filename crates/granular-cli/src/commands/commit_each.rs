//! Commit-each command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use granular_core::PorcelainFormat;
use granular_git::{commit_each, read_changes, GitCli, Progress};
use std::path::PathBuf;
use tabled::Table;

use crate::output::OutcomeRow;

/// Stages and commits every changed file in `repo` on its own.
///
/// Per-file failures are reported but do not fail the command; only an
/// unusable repository directory or offset does.
pub fn cmd_commit_each(repo: PathBuf, git_program: String, path_offset: usize) -> Result<()> {
    if !repo.is_dir() {
        anyhow::bail!("Repository directory {:?} does not exist", repo);
    }
    let format = PorcelainFormat::with_offset(path_offset)
        .with_context(|| format!("Invalid --path-offset {}", path_offset))?;
    let git = GitCli::new(&repo).with_program(git_program);

    println!("{}", "Starting granular commits...".bright_cyan().bold());

    let changes = read_changes(&git, &format);
    if changes.is_empty() {
        println!("{} No changes found to commit.", "✓".green());
        return Ok(());
    }

    println!("Found {} files to commit.", changes.len());

    let summary = commit_each(&git, &changes, |event| match event {
        Progress::Processing { index, total, path } => {
            println!("{} Processing {}...", format!("[{}/{}]", index, total).dimmed(), path);
        }
        Progress::StageFailed { path } => {
            eprintln!("  {} Failed to add {}", "✗".red(), path);
        }
        Progress::CommitFailed { path } => {
            eprintln!("  {} Failed to commit {}", "✗".red(), path);
        }
        Progress::Committed { message, .. } => {
            println!("  {} Committed: {}", "✓".green(), message.bright_yellow());
        }
    });

    if summary.failed() > 0 {
        let rows: Vec<OutcomeRow> = summary.outcomes.iter().map(OutcomeRow::from).collect();
        println!("\n{}", Table::new(rows));
    }

    println!(
        "\n{} Done: {} committed, {} failed.",
        if summary.failed() == 0 { "✓".green() } else { "⚠".yellow() },
        summary.committed().to_string().green(),
        summary.failed().to_string().red(),
    );
    println!("Granular commit process finished.");

    Ok(())
}
