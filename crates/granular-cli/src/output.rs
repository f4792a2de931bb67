//! Output formatting structures for CLI display

use granular_core::FileOutcome;
use tabled::Tabled;

/// Table row for one processed file
#[derive(Tabled)]
pub struct OutcomeRow {
    #[tabled(rename = "File")]
    pub path: String,
    #[tabled(rename = "Result")]
    pub result: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

impl From<&(String, FileOutcome)> for OutcomeRow {
    fn from((path, outcome): &(String, FileOutcome)) -> Self {
        let message = match outcome {
            FileOutcome::Committed { message } | FileOutcome::CommitFailed { message } => {
                message.clone()
            }
            FileOutcome::StageFailed => "-".to_string(),
        };
        Self {
            path: path.clone(),
            result: outcome.as_str().to_string(),
            message,
        }
    }
}
