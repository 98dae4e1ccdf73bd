//! Configuration types for the homework watcher.

use std::time::Duration;

use tracing::{error, warn};

/// Default pause between two polls, in seconds.
pub const DEFAULT_RETRY_SECS: u64 = 600;

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Secrets the bot cannot run without.
#[derive(Clone, Default)]
pub struct Credentials {
    /// OAuth token for the review API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Chat that receives notifications
    pub telegram_chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Credentials {
    /// Reads credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through `lookup`; absent keys become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default().trim().to_string();
        Self {
            practicum_token: get(PRACTICUM_TOKEN),
            telegram_token: get(TELEGRAM_TOKEN),
            telegram_chat_id: get(TELEGRAM_CHAT_ID),
        }
    }

    /// Names of the required variables that are empty.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (PRACTICUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    /// True only if every secret is present. Logs the missing ones otherwise.
    pub fn all_tokens_present(&self) -> bool {
        let missing = self.missing();
        if missing.is_empty() {
            return true;
        }
        error!(missing = ?missing, "required credentials are not set");
        false
    }
}

/// Behaviour knobs of the poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatcherConfig {
    /// Pause after every cycle; also the look-back window of each request
    pub retry_interval: Duration,
    /// Send a "started" message before the first cycle and seed the state with it
    pub announce_start: bool,
    /// Skip reporting a failure whose diagnostic equals the last sent text
    pub suppress_repeated_errors: bool,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            retry_interval: Duration::from_secs(DEFAULT_RETRY_SECS),
            announce_start: true,
            suppress_repeated_errors: true,
        }
    }
}

impl WatcherConfig {
    /// Reads `RETRY_TIME`, `ANNOUNCE_START` and `SUPPRESS_REPEATED_ERRORS`
    /// through `lookup`. Unset or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("RETRY_TIME") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.retry_interval = Duration::from_secs(secs),
                _ => warn!(value = %raw, "invalid RETRY_TIME, using {DEFAULT_RETRY_SECS}s"),
            }
        }

        let flag = |key: &str, default: bool| match lookup(key) {
            Some(raw) => utils::parse_flag(&raw).unwrap_or_else(|| {
                warn!(key, value = %raw, "invalid boolean, using default");
                default
            }),
            None => default,
        };
        config.announce_start = flag("ANNOUNCE_START", config.announce_start);
        config.suppress_repeated_errors =
            flag("SUPPRESS_REPEATED_ERRORS", config.suppress_repeated_errors);

        config
    }
}
