//! Gemini client integration tests against a mock upstream

#[cfg(test)]
mod tests {
    use bento_gateway::config::GeminiConfig;
    use bento_gateway::core::providers::{GeminiClient, ProviderError, TextGenerator};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        let config = GeminiConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            ..GeminiConfig::default()
        };
        GeminiClient::new(&config).unwrap()
    }

    async fn upstream_replies(status: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn api_error(code: u16, status: &str, message: &str) -> serde_json::Value {
        json!({"error": {"code": code, "status": status, "message": message}})
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"parts": [{"text": "Say hi"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hi "}, {"text": "there"}]},
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server).generate("Say hi").await.unwrap();
        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn test_quota_signal() {
        let server = upstream_replies(
            429,
            api_error(429, "RESOURCE_EXHAUSTED", "Quota exceeded for requests per minute"),
        )
        .await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::QuotaExceeded { .. }));
    }

    #[tokio::test]
    async fn test_invalid_key_signal() {
        let server = upstream_replies(
            400,
            json!({"error": {
                "code": 400,
                "status": "INVALID_ARGUMENT",
                "message": "API key not valid. Please pass a valid API key.",
                "details": [{"reason": "API_KEY_INVALID"}]
            }}),
        )
        .await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[tokio::test]
    async fn test_other_failures_are_api_errors() {
        let server = upstream_replies(503, api_error(503, "UNAVAILABLE", "The model is overloaded")).await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_blocked_prompt_has_no_text() {
        let server = upstream_replies(
            200,
            json!({"candidates": [], "promptFeedback": {"blockReason": "SAFETY"}}),
        )
        .await;

        let err = client_for(&server).generate("hi").await.unwrap_err();
        match err {
            ProviderError::ResponseParsing { message, .. } => assert!(message.contains("SAFETY")),
            other => panic!("expected a parsing error, got {:?}", other),
        }
    }
}
