use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Reasons a message could not be delivered.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The Bot API could not be reached. The URL (which embeds the bot token)
    /// is stripped from the inner error.
    #[error("telegram request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The Bot API refused the message (bad chat id, bot blocked, ...).
    #[error(
        "telegram rejected the message ({status}): {}",
        .description.as_deref().unwrap_or("no description")
    )]
    Rejected {
        status: StatusCode,
        description: Option<String>,
    },
}

/// Client for sending messages via Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    api_base: String,
    api_key: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` with the given API key and chat ID.
    pub fn new(client: Client, api_key: String, chat_id: String) -> Self {
        Self {
            client,
            api_base: TELEGRAM_API_BASE.to_string(),
            api_key,
            chat_id,
        }
    }

    /// Points the bot at a different Bot API server (e.g. a local one).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Chat the bot delivers to.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Sends a text message to the configured chat.
    pub async fn push_message(&self, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.api_key);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;
        check_send_response(status, &body)?;
        debug!(chat_id = %self.chat_id, "telegram message sent");
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> TelegramError {
    TelegramError::Transport(err.without_url())
}

/// A send succeeded only if the status is 2xx and the API did not answer `"ok": false`.
fn check_send_response(status: StatusCode, body: &str) -> Result<(), TelegramError> {
    let parsed = serde_json::from_str::<ApiResponse>(body).ok();
    let accepted = parsed.as_ref().map_or(true, |r| r.ok);
    if status.is_success() && accepted {
        return Ok(());
    }
    Err(TelegramError::Rejected {
        status,
        description: parsed.and_then(|r| r.description),
    })
}
