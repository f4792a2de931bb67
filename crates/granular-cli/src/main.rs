//! Granular-Commit CLI - Commits pending changes one file at a time
//!
//! Provides:
//! - Discovery of changed files via `git status --porcelain`
//! - One `git add` + `git commit` per file, message `update <file name>`
//! - A per-file summary of what was committed and what failed

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use granular_core::DEFAULT_PATH_OFFSET;
use std::path::PathBuf;

use commands::cmd_commit_each;

#[derive(Parser)]
#[command(name = "granular-commit")]
#[command(about = "Commit every changed file in a working tree as its own commit", long_about = None)]
#[command(version)]
struct Cli {
    /// Working tree to operate in
    #[arg(short = 'C', long, default_value = ".")]
    repo: PathBuf,

    /// Git executable to run
    #[arg(long, default_value = "git")]
    git: String,

    /// Column at which the path starts in `git status --porcelain` lines
    #[arg(long, default_value_t = DEFAULT_PATH_OFFSET)]
    path_offset: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    cmd_commit_each(cli.repo, cli.git, cli.path_offset)?;

    Ok(())
}
