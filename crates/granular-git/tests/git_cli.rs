//! Runs the reader and driver against a real git repository
//!
//! Skipped when no `git` executable is available.

use granular_core::PorcelainFormat;
use granular_git::{commit_each, read_changes, CommandRunner, GitCli};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

// ── fixtures ─────────────────────────────────────────────────────────────────

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Initialises a repository with a local identity so commits succeed.
fn init_repo() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let git = GitCli::new(tmp.path());
    let setup: [&[&str]; 4] = [
        &["init", "--quiet"],
        &["config", "user.name", "Granular Test"],
        &["config", "user.email", "granular@example.com"],
        &["config", "commit.gpgsign", "false"],
    ];
    for args in setup {
        assert!(git.run(args).success, "git {:?} failed", args);
    }
    tmp
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn log_subjects(git: &GitCli) -> Vec<String> {
    git.run(&["log", "--format=%s"])
        .into_output()
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

// ── tests ────────────────────────────────────────────────────────────────────

#[test]
fn test_clean_tree_has_no_changes() {
    if !git_available() {
        return;
    }
    let tmp = init_repo();
    let git = GitCli::new(tmp.path());
    assert!(read_changes(&git, &PorcelainFormat::default()).is_empty());
}

#[test]
fn test_each_file_gets_its_own_commit() {
    if !git_available() {
        return;
    }
    let tmp = init_repo();
    let git = GitCli::new(tmp.path());
    write(tmp.path(), "src/utils/helper.py", "print('hi')\n");
    assert!(git.run(&["add", "."]).success);
    assert!(git.run(&["commit", "--quiet", "-m", "initial"]).success);

    // untracked directories are collapsed by status, so nest only tracked files
    write(tmp.path(), "src/utils/helper.py", "print('bye')\n");
    write(tmp.path(), "README.md", "hello\n");

    let changes = read_changes(&git, &PorcelainFormat::default());
    let paths: Vec<&str> = changes.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["src/utils/helper.py", "README.md"]);

    let summary = commit_each(&git, &changes, |_| {});
    assert_eq!(summary.committed(), 2);

    assert_eq!(
        log_subjects(&git),
        vec!["update README.md", "update helper.py", "initial"]
    );
    assert!(read_changes(&git, &PorcelainFormat::default()).is_empty());
}

#[test]
fn test_path_with_space_is_committed() {
    if !git_available() {
        return;
    }
    let tmp = init_repo();
    write(tmp.path(), "a b.txt", "spaced\n");

    let git = GitCli::new(tmp.path());
    let changes = read_changes(&git, &PorcelainFormat::default());
    assert_eq!(changes[0].path, "a b.txt");

    let summary = commit_each(&git, &changes, |_| {});
    assert_eq!(summary.committed(), 1);
    assert_eq!(log_subjects(&git), vec!["update a b.txt"]);
}

#[test]
fn test_non_ascii_path_is_committed() {
    if !git_available() {
        return;
    }
    let tmp = init_repo();
    write(tmp.path(), "é.txt", "accent\n");

    let git = GitCli::new(tmp.path());
    let changes = read_changes(&git, &PorcelainFormat::default());
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].path, "é.txt");

    let summary = commit_each(&git, &changes, |_| {});
    assert_eq!(summary.committed(), 1);
    assert_eq!(log_subjects(&git), vec!["update é.txt"]);
}

#[test]
fn test_pre_staged_files_land_in_first_commit() {
    if !git_available() {
        return;
    }
    let tmp = init_repo();
    write(tmp.path(), "a.txt", "a\n");
    write(tmp.path(), "b.txt", "b\n");

    let git = GitCli::new(tmp.path());
    assert!(git.run(&["add", "a.txt", "b.txt"]).success);

    let changes = read_changes(&git, &PorcelainFormat::default());
    let summary = commit_each(&git, &changes, |_| {});

    // `git commit -m` takes the whole index, so nothing is left for b.txt
    assert!(summary.outcomes[0].1.is_committed());
    assert!(!summary.outcomes[1].1.is_committed());
    assert_eq!(log_subjects(&git), vec!["update a.txt"]);
}
