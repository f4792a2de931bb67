//! Error types for granular-core

/// Errors specific to granular-core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed status line: {0:?}")]
    MalformedStatusLine(String),

    #[error("Invalid path offset {0}: must leave room for a two-character status code")]
    InvalidOffset(usize),
}
