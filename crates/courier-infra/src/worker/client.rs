//! WorkerClient -- concrete [`ResponseGenerator`] for the HTTP response worker.
//!
//! Posts each relayed message to `{url}/chat` as JSON and decodes the
//! worker's `{"response": ...}` body.
//!
//! The optional API key is wrapped in [`secrecy::SecretString`] and is only
//! exposed when building the `Authorization` header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use courier_core::relay::ResponseGenerator;
use courier_types::config::WorkerConfig;
use courier_types::error::RelayError;
use courier_types::message::{ChatReply, ChatRequest};

/// HTTP response worker client.
///
/// Does not derive Debug so the API key never reaches log output.
pub struct WorkerClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl WorkerClient {
    /// Create a client for the configured worker.
    pub fn new(config: &WorkerConfig, api_key: Option<SecretString>) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RelayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, &config.url, api_key))
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        api_key: Option<SecretString>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

impl ResponseGenerator for WorkerClient {
    fn name(&self) -> &str {
        "worker"
    }

    async fn generate(&self, request: &ChatRequest) -> Result<ChatReply, RelayError> {
        let mut builder = self.client.post(self.chat_url()).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| RelayError::Decode(format!("failed to parse response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;

    /// Serve a single HTTP response and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut read = [0u8; 1024];
            loop {
                let n = socket.read(&mut read).await.unwrap();
                buf.extend_from_slice(&read[..n]);
                if n == 0 || request_complete(&buf) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&buf).to_string()
        });

        (format!("http://{addr}"), handle)
    }

    fn request_complete(buf: &[u8]) -> bool {
        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]);
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        buf.len() >= head_end + 4 + content_length
    }

    fn client(url: &str, api_key: Option<&str>) -> WorkerClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        WorkerClient::with_client(http, url, api_key.map(|k| SecretString::from(k.to_string())))
    }

    fn request() -> ChatRequest {
        ChatRequest {
            session_id: "guild-1".to_string(),
            input: "!ai hello".to_string(),
            author: "user-1".to_string(),
            respond: true,
        }
    }

    #[test]
    fn chat_url_strips_trailing_slash() {
        let c = client("http://worker.test/", None);
        assert_eq!(c.chat_url(), "http://worker.test/chat");
    }

    #[tokio::test]
    async fn posts_camel_case_payload_and_decodes_reply() {
        let (url, server) = serve_once("200 OK", r#"{"response":"hi there"}"#).await;
        let reply = client(&url, Some("s3cret")).generate(&request()).await.unwrap();
        assert_eq!(reply.text(), Some("hi there"));

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /chat "));
        assert!(raw.to_lowercase().contains("authorization: bearer s3cret"));
        assert!(raw.contains(r#""sessionId":"guild-1""#));
        assert!(raw.contains(r#""respond":true"#));
    }

    #[tokio::test]
    async fn missing_response_field_is_not_an_error() {
        let (url, server) = serve_once("200 OK", r#"{"stored":true}"#).await;
        let reply = client(&url, None).generate(&request()).await.unwrap();
        assert_eq!(reply.text(), None);

        let raw = server.await.unwrap();
        assert!(!raw.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_status_error() {
        let (url, _server) = serve_once("503 Service Unavailable", r#"{"error":"busy"}"#).await;
        let err = client(&url, None).generate(&request()).await.unwrap_err();
        match err {
            RelayError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.contains("busy"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_decode_error() {
        let (url, _server) = serve_once("200 OK", "not json").await;
        let err = client(&url, None).generate(&request()).await.unwrap_err();
        assert!(matches!(err, RelayError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_worker_maps_to_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"), None)
            .generate(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
