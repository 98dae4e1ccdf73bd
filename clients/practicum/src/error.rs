use reqwest::StatusCode;
use thiserror::Error;

/// Failures of a single homework statuses request.
#[derive(Debug, Error)]
pub enum PracticumError {
    /// The request never produced a complete response (DNS, timeout, reset).
    #[error("failed to reach the homework API: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// The endpoint answered with something other than 200 OK.
    #[error("homework API responded with HTTP {status}")]
    ResponseStatus { status: StatusCode },

    /// The body of a 200 response is not valid JSON.
    #[error("homework API returned an undecodable body: {0}")]
    MalformedPayload(#[source] serde_json::Error),
}
