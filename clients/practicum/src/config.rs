use url::Url;

/// Homework statuses endpoint of the Practicum user API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Configuration for PracticumClient
#[derive(Debug, Clone)]
pub struct PracticumClientConfig {
    /// OAuth token for the Practicum API
    pub token: String,
    /// Homework statuses endpoint
    pub base_url: Url,
}
