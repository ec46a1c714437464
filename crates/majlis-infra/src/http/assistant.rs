//! HttpAssistantClient -- concrete [`AssistantClient`] implementation.
//!
//! Sends the conversation to the remote assistant endpoint as a JSON POST
//! and parses the single-reply response. Any non-2xx status, connection
//! failure, or unparsable body surfaces as a transport-level error; when
//! the server includes a `detail` message in its error body, that text is
//! preferred over the generic HTTP error.

use std::time::Duration;

use majlis_core::session::assistant::AssistantClient;
use majlis_types::api::{ChatRequest, ChatResponse, ResponseStatus};
use majlis_types::chat::ChatMessage;
use majlis_types::config::GlobalConfig;
use majlis_types::error::AssistantError;
use serde::Deserialize;

/// Error body shape for server-reported failures (`{"detail": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Remote assistant client over HTTP.
pub struct HttpAssistantClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssistantClient {
    /// Create a new client for the given endpoint.
    ///
    /// The timeout is the transport's own limit; the session store imposes
    /// none of its own.
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Create a client from the global configuration.
    pub fn from_config(config: &GlobalConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.api_endpoint.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Extract the server-provided detail text from an error body, if any.
fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.detail)
}

impl AssistantClient for HttpAssistantClient {
    async fn reply(
        &self,
        conversation: &[ChatMessage],
        new_message: &ChatMessage,
    ) -> Result<ChatMessage, AssistantError> {
        let body = ChatRequest {
            conversation: conversation.to_vec(),
            new_message: new_message.clone(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match parse_detail(&error_body) {
                Some(detail) => AssistantError::Api { detail },
                None => AssistantError::Http(format!("HTTP {status}: {error_body}")),
            });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Deserialization(e.to_string()))?;

        if chat_response.status != ResponseStatus::Ok {
            return Err(AssistantError::Api {
                detail: "assistant reported an error".to_string(),
            });
        }

        Ok(chat_response.assistant_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use majlis_types::chat::MessageRole;

    fn make_client() -> HttpAssistantClient {
        HttpAssistantClient::new(
            "http://127.0.0.1:8000/api/chat".to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_retained() {
        let client = make_client();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/api/chat");
    }

    #[test]
    fn test_from_config_uses_configured_endpoint() {
        let config = GlobalConfig {
            api_endpoint: "https://chat.example.net/api/chat".to_string(),
            request_timeout_secs: 5,
        };
        let client = HttpAssistantClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "https://chat.example.net/api/chat");
    }

    #[test]
    fn test_parse_detail_from_server_error() {
        let body = r#"{"detail": "Gemini API error: quota exceeded"}"#;
        assert_eq!(
            parse_detail(body).as_deref(),
            Some("Gemini API error: quota exceeded")
        );
    }

    #[test]
    fn test_parse_detail_missing_or_malformed() {
        assert!(parse_detail("").is_none());
        assert!(parse_detail("Internal Server Error").is_none());
        assert!(parse_detail(r#"{"error": "nope"}"#).is_none());
    }

    #[test]
    fn test_request_wire_shape() {
        let conversation = vec![
            ChatMessage::now(MessageRole::User, "a"),
            ChatMessage::now(MessageRole::Assistant, "b"),
        ];
        let new_message = ChatMessage::now(MessageRole::User, "c");
        let body = ChatRequest {
            conversation: conversation.clone(),
            new_message: new_message.clone(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["conversation"].as_array().unwrap().len(), 2);
        assert_eq!(value["conversation"][0]["role"], "user");
        assert_eq!(value["new_message"]["content"], "c");
    }

    /// Serve exactly one canned HTTP response on an ephemeral port.
    async fn one_shot_server(status_line: &'static str, body: &'static str) -> std::net::SocketAddr {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            let response = format!(
                "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });

        addr
    }

    #[tokio::test]
    async fn test_error_status_in_ok_response_is_api_error() {
        // A 2xx body whose protocol-level status is "error" must be
        // reported as a failure, not as a usable reply.
        let body = r#"{"assistant_message":{"role":"assistant","content":"unused","timestamp":"2025-09-23T12:00:00Z"},"status":"error"}"#;
        let addr = one_shot_server("HTTP/1.1 200 OK", body).await;

        let client = HttpAssistantClient::new(
            format!("http://{addr}/api/chat"),
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client
            .reply(&[], &ChatMessage::now(MessageRole::User, "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, AssistantError::Api { .. }));
        assert_eq!(err.to_string(), "assistant reported an error");
    }

    #[tokio::test]
    async fn test_server_error_detail_is_surfaced() {
        let body = r#"{"detail": "Gemini API error: quota exceeded"}"#;
        let addr = one_shot_server("HTTP/1.1 500 Internal Server Error", body).await;

        let client = HttpAssistantClient::new(
            format!("http://{addr}/api/chat"),
            Duration::from_secs(1),
        )
        .unwrap();

        let err = client
            .reply(&[], &ChatMessage::now(MessageRole::User, "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, AssistantError::Api { .. }));
        assert_eq!(err.to_string(), "Gemini API error: quota exceeded");
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1; the connect fails immediately.
        let client =
            HttpAssistantClient::new("http://127.0.0.1:1/api/chat".to_string(), Duration::from_secs(1))
                .unwrap();

        let err = client
            .reply(&[], &ChatMessage::now(MessageRole::User, "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, AssistantError::Http(_)));
    }
}
