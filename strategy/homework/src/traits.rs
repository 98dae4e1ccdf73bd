//! Seams between the watcher and the outside world.

use async_trait::async_trait;
use clients_practicum::PracticumClient;
use clients_telegrambot::TelegramBot;
use serde_json::Value;

use crate::error::CycleError;

/// Source of homework review responses.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch the raw response listing submissions changed since `from_date`.
    async fn fetch_answer(&self, from_date: i64) -> Result<Value, CycleError>;
}

/// Destination for status and failure messages.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the configured chat.
    async fn notify(&self, text: &str) -> Result<(), CycleError>;
}

#[async_trait]
impl ReviewSource for PracticumClient {
    async fn fetch_answer(&self, from_date: i64) -> Result<Value, CycleError> {
        Ok(self.get_homework_statuses(from_date).await?)
    }
}

#[async_trait]
impl Notifier for TelegramBot {
    async fn notify(&self, text: &str) -> Result<(), CycleError> {
        Ok(self.push_message(text).await?)
    }
}
