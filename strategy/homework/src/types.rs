//! Shared types for the homework watcher.

use serde_json::Value;

use crate::error::CycleError;

/// State carried from one cycle to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Text of the last message the watcher tried to deliver
    pub last_notified_text: Option<String>,
}

impl PollState {
    /// Whether `text` differs from the last notified text.
    pub fn is_new(&self, text: &str) -> bool {
        self.last_notified_text.as_deref() != Some(text)
    }

    pub fn record(&mut self, text: String) {
        self.last_notified_text = Some(text);
    }
}

/// The latest submission of a response, as found in the payload.
///
/// Fields are optional here; `render_status` decides whether they are usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    /// `homework_name` of the submission
    pub name: Option<String>,
    /// Raw `status` code of the submission
    pub status: Option<String>,
}

impl SubmissionRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// Builds a record from one element of the `homeworks` list.
    ///
    /// Non-string values are treated as absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            name: field("homework_name"),
            status: field("status"),
        }
    }
}

/// What a single cycle did.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A new status message was sent (or attempted)
    Notified { text: String, delivered: bool },
    /// The latest status renders to the text already sent
    Unchanged,
    /// The response contained no submissions
    NoSubmissions,
    /// The cycle failed; `reported` tells whether the diagnostic reached the chat
    Failed { error: CycleError, reported: bool },
}
