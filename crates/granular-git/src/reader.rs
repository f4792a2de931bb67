//! Status reader

use crate::executor::CommandRunner;
use granular_core::{ChangeRecord, PorcelainFormat};

const STATUS_ARGS: [&str; 2] = ["status", "--porcelain"];

/// Lists changed files in status output order.
///
/// An empty list means there is nothing to commit; that includes a status
/// command that produced no result (its error text has already been
/// reported by the runner). Lines that cannot be parsed are logged and
/// skipped.
pub fn read_changes<R: CommandRunner + ?Sized>(
    runner: &R,
    format: &PorcelainFormat,
) -> Vec<ChangeRecord> {
    let Some(output) = runner.run(&STATUS_ARGS).into_output() else {
        return Vec::new();
    };

    if output.trim().is_empty() {
        return Vec::new();
    }

    format
        .parse_output(&output)
        .filter_map(|parsed| match parsed {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping status line: {}", e);
                None
            }
        })
        .collect()
}
