//! Commit driver - one commit per changed file

use crate::executor::CommandRunner;
use granular_core::{commit_message, ChangeRecord, FileOutcome, RunSummary};

/// Progress notifications emitted while committing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress<'a> {
    /// About to stage the `index`-th (1-based) of `total` paths
    Processing {
        index: usize,
        total: usize,
        path: &'a str,
    },
    StageFailed { path: &'a str },
    CommitFailed { path: &'a str },
    Committed { path: &'a str, message: &'a str },
}

/// Stages and commits every record on its own, in order.
///
/// A failed `git add` skips that file's commit; a failed `git commit` is
/// recorded. Neither stops the loop, so every record is attempted.
pub fn commit_each<R, F>(runner: &R, records: &[ChangeRecord], mut on_progress: F) -> RunSummary
where
    R: CommandRunner + ?Sized,
    F: FnMut(Progress<'_>),
{
    let total = records.len();
    let mut summary = RunSummary::default();

    for (idx, record) in records.iter().enumerate() {
        let path = record.path.as_str();
        emit(&mut on_progress, Progress::Processing { index: idx + 1, total, path });

        if !runner.run(&["add", "--", path]).success {
            emit(&mut on_progress, Progress::StageFailed { path });
            summary.record(path, FileOutcome::StageFailed);
            continue;
        }

        let message = commit_message(path);
        if runner.run(&["commit", "-m", message.as_str()]).success {
            emit(&mut on_progress, Progress::Committed { path, message: &message });
            summary.record(path, FileOutcome::Committed { message });
        } else {
            emit(&mut on_progress, Progress::CommitFailed { path });
            summary.record(path, FileOutcome::CommitFailed { message });
        }
    }

    log::debug!(
        "Committed {} of {} files ({} failed)",
        summary.committed(),
        summary.total(),
        summary.failed()
    );
    summary
}

fn emit<F: FnMut(Progress<'_>)>(on_progress: &mut F, event: Progress<'_>) {
    log::debug!("{:?}", event);
    on_progress(event);
}
