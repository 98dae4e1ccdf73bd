use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use tracing::debug;

use crate::config::PracticumClientConfig;
use crate::error::PracticumError;
use crate::utils;

/// Client for the Practicum homework statuses API.
pub struct PracticumClient {
    client: reqwest::Client,
    config: PracticumClientConfig,
}

impl PracticumClient {
    pub fn new(client: reqwest::Client, config: PracticumClientConfig) -> Self {
        Self { client, config }
    }

    /// Fetches the submissions whose status changed since `from_date` (Unix seconds).
    ///
    /// Makes exactly one request; retrying is left to the caller.
    pub async fn get_homework_statuses(&self, from_date: i64) -> Result<Value, PracticumError> {
        let url = utils::statuses_url(&self.config.base_url, from_date);
        debug!(%url, "requesting homework statuses");

        let resp = self
            .client
            .get(url)
            .header(AUTHORIZATION, utils::authorization_header(&self.config.token))
            .send()
            .await
            .map_err(PracticumError::Connectivity)?;

        utils::check_status(resp.status())?;
        let body = resp.text().await.map_err(PracticumError::Connectivity)?;
        let value = utils::decode_body(&body)?;
        debug!("homework statuses decoded");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;
    use url::Url;

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Accepts one connection, answers it with `response` and yields the raw request.
    async fn serve_once(response: String) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        let url = Url::parse(&format!("http://{addr}/api/user_api/homework_statuses/")).unwrap();
        (url, handle)
    }

    fn client(base_url: Url) -> PracticumClient {
        PracticumClient::new(
            reqwest::Client::new(),
            PracticumClientConfig {
                token: "practicum-token".to_string(),
                base_url,
            },
        )
    }

    #[tokio::test]
    async fn test_request_carries_from_date_and_oauth_header() {
        let body = r#"{"homeworks":[{"homework_name":"hw1","status":"approved"}],"current_date":100}"#;
        let (url, server) = serve_once(http_response("200 OK", body)).await;

        let value = client(url).get_homework_statuses(1_700_000_000).await.unwrap();

        assert_eq!(value["homeworks"][0]["homework_name"], "hw1");
        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap();
        assert_eq!(
            request_line,
            "GET /api/user_api/homework_statuses/?from_date=1700000000 HTTP/1.1"
        );
        assert!(request
            .to_ascii_lowercase()
            .contains("authorization: oauth practicum-token\r\n"));
    }

    #[tokio::test]
    async fn test_503_is_status_error() {
        let (url, server) =
            serve_once(http_response("503 Service Unavailable", "maintenance")).await;

        let err = client(url).get_homework_statuses(0).await.unwrap_err();

        match err {
            PracticumError::ResponseStatus { status } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (url, server) = serve_once(http_response("200 OK", "<html></html>")).await;

        let err = client(url).get_homework_statuses(0).await.unwrap_err();

        assert!(matches!(err, PracticumError::MalformedPayload(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_port_is_connectivity_error() {
        let url = Url::parse("http://127.0.0.1:1/").unwrap();

        let err = client(url).get_homework_statuses(0).await.unwrap_err();

        assert!(matches!(err, PracticumError::Connectivity(_)));
    }
}
