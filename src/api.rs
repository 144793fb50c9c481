use crate::{
    config::Config,
    constants::{
        EMPTY_REPLY, INVALID_REQUEST_REPLY, MISSING_KEY_REPLY, PERMISSION_DENIED_REPLY,
        RATE_LIMITED_REPLY, UNAVAILABLE_REPLY,
    },
    errors::{ChatError, ChatResult},
    logging::{log_api_call, ApiCallLog},
    models::{GenerateContentRequest, GenerateContentResponse, ReplyText},
};
use log::{debug, error, warn};
use reqwest::Client;
use std::time::Instant;

/// Why a call did not produce a reply. Every failure maps to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidRequest,
    PermissionDenied,
    RateLimited,
    Unavailable,
}

impl FailureKind {
    /// `None` means no HTTP response was received at all.
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(400) => FailureKind::InvalidRequest,
            Some(403) => FailureKind::PermissionDenied,
            Some(429) => FailureKind::RateLimited,
            _ => FailureKind::Unavailable,
        }
    }

    pub fn from_error(err: &ChatError) -> Self {
        Self::from_status(err.status())
    }

    pub fn message(self) -> &'static str {
        match self {
            FailureKind::InvalidRequest => INVALID_REQUEST_REPLY,
            FailureKind::PermissionDenied => PERMISSION_DENIED_REPLY,
            FailureKind::RateLimited => RATE_LIMITED_REPLY,
            FailureKind::Unavailable => UNAVAILABLE_REPLY,
        }
    }
}

/// Sends single-turn prompts to the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: Config,
}

impl GeminiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_valid_key(&self) -> bool {
        self.config.has_valid_key()
    }

    /// Endpoint URL without the key.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Returns a display-ready string for every outcome: the reply itself, the
    /// missing-key warning, the empty-reply fallback, or a classified failure.
    pub async fn send_message(&self, user_text: &str) -> String {
        if !self.has_valid_key() {
            debug!("No usable API key configured, skipping request");
            return MISSING_KEY_REPLY.to_string();
        }

        match self.request_reply(user_text).await {
            Ok(ReplyText::Present(text)) => text,
            Ok(ReplyText::Absent) => EMPTY_REPLY.to_string(),
            Err(e) => {
                let kind = FailureKind::from_error(&e);
                error!("API Error ({:?}): {}", kind, e);
                kind.message().to_string()
            }
        }
    }

    /// Makes one request and returns the raw outcome.
    pub async fn request_reply(&self, user_text: &str) -> ChatResult<ReplyText> {
        let api_key = self
            .config
            .usable_key()
            .ok_or_else(|| ChatError::config_error("API key is not configured"))?;

        let endpoint = self.endpoint();
        let start_time = Instant::now();

        let result = self
            .client
            .post(&endpoint)
            .query(&[("key", api_key)])
            .json(&GenerateContentRequest::single_turn(user_text))
            .send()
            .await;

        log_api_call(&ApiCallLog {
            endpoint: endpoint.clone(),
            request_summary: format!("generateContent ({} chars)", user_text.chars().count()),
            response_status: result.as_ref().ok().map(|r| r.status().as_u16()),
            response_time_ms: start_time.elapsed().as_millis(),
        });

        // The request URL carries the key, so it is stripped from every error.
        let response = result.map_err(|e| ChatError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ChatError::Transport(e.without_url()))?;

        match serde_json::from_slice::<GenerateContentResponse>(&bytes) {
            Ok(body) => Ok(body.into_reply()),
            Err(e) => {
                warn!("Failed to parse API response, treating it as empty: {}", e);
                Ok(ReplyText::Absent)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MODEL, PLACEHOLDER_API_KEY};
    use serde_json::json;
    use wiremock::{
        matchers::{any, body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    const TEST_KEY: &str = "test-api-key";

    fn generate_path() -> String {
        format!("/v1beta/models/{}:generateContent", DEFAULT_MODEL)
    }

    fn client_for(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            Config::default()
                .with_base_url(server.uri())
                .with_api_key(api_key.map(str::to_string)),
        )
    }

    async fn reply_with_status(status: u16) -> String {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(generate_path()))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(json!({"error": {"code": status, "message": "nope"}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        client_for(&mock_server, Some(TEST_KEY))
            .send_message("hello")
            .await
    }

    #[test]
    fn test_failure_kind_mapping_is_total() {
        assert_eq!(FailureKind::from_status(Some(400)), FailureKind::InvalidRequest);
        assert_eq!(FailureKind::from_status(Some(403)), FailureKind::PermissionDenied);
        assert_eq!(FailureKind::from_status(Some(429)), FailureKind::RateLimited);
        for status in [Some(401), Some(404), Some(500), Some(503), None] {
            assert_eq!(FailureKind::from_status(status), FailureKind::Unavailable);
        }
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let client = GeminiClient::new(Config::default().with_base_url("http://localhost:8080/"));
        assert_eq!(
            client.endpoint(),
            format!("http://localhost:8080{}", generate_path())
        );
    }

    #[tokio::test]
    async fn test_gemini_response_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(generate_path()))
            .and(query_param("key", TEST_KEY))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "hello"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "Hi there!"}], "role": "model"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server, Some(TEST_KEY))
            .send_message("hello")
            .await;
        assert_eq!(reply, "Hi there!");
    }

    #[tokio::test]
    async fn test_reply_is_returned_verbatim() {
        let mock_server = MockServer::start().await;
        let text = "  **Bold** line one\n<script>two</script>  ";

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": text}]}}]
            })))
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server, Some(TEST_KEY))
            .send_message("format something")
            .await;
        assert_eq!(reply, text);
    }

    #[tokio::test]
    async fn test_missing_reply_text_falls_back() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"candidates": [{"content": {}}]})),
            )
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server, Some(TEST_KEY))
            .send_message("hello")
            .await;
        assert_eq!(reply, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_non_json_success_body_falls_back() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, Some(TEST_KEY));
        assert_eq!(
            client.request_reply("hello").await.unwrap(),
            ReplyText::Absent
        );
        assert_eq!(client.send_message("hello").await, EMPTY_REPLY);
    }

    #[tokio::test]
    async fn test_status_codes_map_to_fixed_strings() {
        assert_eq!(reply_with_status(400).await, INVALID_REQUEST_REPLY);
        assert_eq!(reply_with_status(403).await, PERMISSION_DENIED_REPLY);
        assert_eq!(reply_with_status(429).await, RATE_LIMITED_REPLY);
        assert_eq!(reply_with_status(500).await, UNAVAILABLE_REPLY);
        assert_eq!(reply_with_status(404).await, UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn test_status_error_keeps_body_for_diagnostics() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("PERMISSION_DENIED"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, Some(TEST_KEY))
            .request_reply("hello")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(err.to_string().contains("PERMISSION_DENIED"));
    }

    #[tokio::test]
    async fn test_connection_failure_is_unavailable() {
        // Nothing listens on port 1.
        let client = GeminiClient::new(
            Config::default()
                .with_base_url("http://127.0.0.1:1")
                .with_api_key(Some(TEST_KEY.to_string())),
        );

        let err = client.request_reply("hello").await.unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
        assert!(!err.to_string().contains(TEST_KEY));
        assert_eq!(client.send_message("hello").await, UNAVAILABLE_REPLY);
    }

    #[tokio::test]
    async fn test_missing_or_placeholder_key_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        for key in [None, Some(""), Some(PLACEHOLDER_API_KEY)] {
            let client = client_for(&mock_server, key);
            assert!(!client.has_valid_key());
            assert_eq!(client.send_message("hello").await, MISSING_KEY_REPLY);
            assert!(matches!(
                client.request_reply("hello").await,
                Err(ChatError::Config(_))
            ));
        }

        mock_server.verify().await;
    }
}
