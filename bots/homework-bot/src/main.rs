//! Homework bot: poll the Practicum review API every `RETRY_TIME` seconds and
//! push status changes via Telegram.
//!
//! Required environment (a `.env` file is honoured):
//! `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID`.
//!
//! Optional: `PRACTICUM_ENDPOINT`, `TELEGRAM_API_URL`, `RETRY_TIME`,
//! `HTTP_TIMEOUT_SECS`, `ANNOUNCE_START`, `SUPPRESS_REPEATED_ERRORS`, `RUST_LOG`.

use anyhow::Context;
use clients_practicum::{PracticumClient, PracticumClientConfig, DEFAULT_ENDPOINT};
use clients_telegrambot::TelegramBot;
use homework::{Credentials, HomeworkWatcher, WatcherConfig};
use tokio::time::Duration;
use tracing::{info, warn};
use url::Url;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .with_line_number(true)
        .init();

    let credentials = Credentials::from_env();
    if !credentials.all_tokens_present() {
        std::process::exit(1);
    }

    let endpoint = env_var("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let base_url = Url::parse(&endpoint)
        .with_context(|| format!("invalid PRACTICUM_ENDPOINT: {endpoint}"))?;

    let timeout_secs = match env_var("HTTP_TIMEOUT_SECS").map(|raw| raw.trim().parse::<u64>()) {
        Some(Ok(secs)) if secs > 0 => secs,
        Some(_) => {
            warn!("invalid HTTP_TIMEOUT_SECS, using {DEFAULT_HTTP_TIMEOUT_SECS}s");
            DEFAULT_HTTP_TIMEOUT_SECS
        }
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("failed to build HTTP client")?;

    let practicum = PracticumClient::new(
        client.clone(),
        PracticumClientConfig {
            token: credentials.practicum_token,
            base_url,
        },
    );

    let mut telegram = TelegramBot::new(
        client,
        credentials.telegram_token,
        credentials.telegram_chat_id,
    );
    if let Some(api_base) = env_var("TELEGRAM_API_URL") {
        telegram = telegram.with_api_base(api_base);
    }
    info!(chat_id = telegram.chat_id(), %endpoint, "homework bot starting");

    let config = WatcherConfig::from_lookup(env_var);
    HomeworkWatcher::new(config, practicum, telegram).run().await;
    Ok(())
}
