//! Commit message derivation

use std::path::Path;

/// Builds the commit message for a single path: `update <file name>`.
///
/// Only the final path segment is kept, so `src/utils/helper.py` becomes
/// `update helper.py`. A path without a usable final segment (e.g. `..`)
/// falls back to the path as given.
pub fn commit_message(path: &str) -> String {
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.into());
    format!("update {}", name)
}
