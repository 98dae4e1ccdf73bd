//! Failure kinds of a single poll cycle.

use clients_practicum::PracticumError;
use clients_telegrambot::TelegramError;
use thiserror::Error;

/// Everything that can go wrong between fetching and notifying.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The review API could not be reached.
    #[error("connectivity error: {0}")]
    Connectivity(String),

    /// The review API answered with a non-200 status.
    #[error("unexpected HTTP status {status}")]
    ResponseStatus { status: u16 },

    /// The review API body is not decodable.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The payload decoded but does not have the expected content.
    #[error("incorrect response: {0}")]
    ResponseIncorrect(String),

    /// The chat refused or never received a message.
    #[error("delivery error: {0}")]
    Delivery(String),
}

impl CycleError {
    pub(crate) fn incorrect(reason: impl Into<String>) -> Self {
        Self::ResponseIncorrect(reason.into())
    }

    /// Human-readable description used in failure notifications.
    pub fn describe(&self) -> String {
        match self {
            Self::Connectivity(detail) => {
                format!("Не удалось подключиться к API: {detail}")
            }
            Self::ResponseStatus { status } => {
                format!("Эндпоинт API недоступен, код ответа: {status}")
            }
            Self::MalformedPayload(detail) => {
                format!("Ответ API не удалось разобрать: {detail}")
            }
            Self::ResponseIncorrect(detail) => {
                format!("Некорректный ответ API: {detail}")
            }
            Self::Delivery(detail) => {
                format!("Не удалось отправить сообщение: {detail}")
            }
        }
    }
}

impl From<PracticumError> for CycleError {
    fn from(err: PracticumError) -> Self {
        match err {
            PracticumError::Connectivity(e) => Self::Connectivity(e.to_string()),
            PracticumError::ResponseStatus { status } => Self::ResponseStatus {
                status: status.as_u16(),
            },
            PracticumError::MalformedPayload(e) => Self::MalformedPayload(e.to_string()),
        }
    }
}

impl From<TelegramError> for CycleError {
    fn from(err: TelegramError) -> Self {
        Self::Delivery(err.to_string())
    }
}
