//! Homework review watcher.
//!
//! Polls the review API, turns the latest submission into a status message
//! and pushes it to a chat whenever the message changes.

pub mod config;
mod error;
mod response;
mod traits;
mod types;
mod verdict;
mod watcher;

pub use config::{Credentials, WatcherConfig};
pub use error::CycleError;
pub use response::extract_latest;
pub use traits::{Notifier, ReviewSource};
pub use types::{CycleOutcome, PollState, SubmissionRecord};
pub use verdict::{render_failure, render_status, verdict_for};
pub use watcher::HomeworkWatcher;
