use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::error::PracticumError;

/// `Authorization` header value for an OAuth token.
pub fn authorization_header(token: &str) -> String {
    format!("OAuth {}", token)
}

/// Endpoint URL with `from_date` appended to any query the base already has.
pub fn statuses_url(base_url: &Url, from_date: i64) -> Url {
    let mut url = base_url.clone();
    url.query_pairs_mut()
        .append_pair("from_date", &from_date.to_string());
    url
}

/// Anything but 200 OK is a status error; the body is not worth reading then.
pub fn check_status(status: StatusCode) -> Result<(), PracticumError> {
    if status != StatusCode::OK {
        return Err(PracticumError::ResponseStatus { status });
    }
    Ok(())
}

/// Decodes the body of a 200 response as JSON.
pub fn decode_body(body: &str) -> Result<Value, PracticumError> {
    serde_json::from_str(body).map_err(PracticumError::MalformedPayload)
}
