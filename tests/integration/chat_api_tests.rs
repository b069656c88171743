//! `/api` integration tests
//!
//! Requests go through the full middleware stack built by `HttpServer::create_app`.

#[cfg(test)]
mod tests {
    use crate::common::{ScriptedGenerator, app_state, chat_request};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use bento_gateway::core::chat::HIDDEN_VERIFICATION_CODE;
    use bento_gateway::core::providers::ProviderError;
    use bento_gateway::server::HttpServer;
    use serde_json::{Value, json};

    // ==================== Happy path ====================

    #[actix_web::test]
    async fn test_question_about_hans_gets_a_reply() {
        let generator = ScriptedGenerator::replying("Hans is a software engineer.");
        let app = test::init_service(HttpServer::create_app(app_state(generator.clone()))).await;

        let req = chat_request(
            "198.51.100.1",
            json!({"message": "What do you know about Hans?", "conversationHistory": []}),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["model"], "gemini-1.5-flash");
        assert!(!body["message"].as_str().unwrap().is_empty());
        assert!(body["timestamp"].is_string());

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains(HIDDEN_VERIFICATION_CODE));
        assert!(prompts[0].ends_with("User: What do you know about Hans?\n\nHans:"));
    }

    #[actix_web::test]
    async fn test_prompt_keeps_last_eight_history_entries_in_order() {
        let generator = ScriptedGenerator::replying("ok");
        let app = test::init_service(HttpServer::create_app(app_state(generator.clone()))).await;

        let history: Vec<Value> = (0..12)
            .map(|i| {
                let role = if i % 2 == 0 { "user" } else { "assistant" };
                json!({"role": role, "content": format!("turn-{:02}", i)})
            })
            .collect();
        let req = chat_request(
            "198.51.100.2",
            json!({"message": "latest", "conversationHistory": history}),
        )
        .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let prompt = &generator.prompts()[0];
        for dropped in 0..4 {
            assert!(!prompt.contains(&format!("turn-{:02}", dropped)));
        }
        let positions: Vec<usize> = (4..12)
            .map(|kept| prompt.find(&format!("turn-{:02}", kept)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(prompt.contains("user: turn-04\nassistant: turn-05"));
    }

    // ==================== Validation ====================

    #[actix_web::test]
    async fn test_missing_or_empty_message_is_bad_request() {
        let generator = ScriptedGenerator::replying("unused");
        let app = test::init_service(HttpServer::create_app(app_state(generator.clone()))).await;

        for body in [
            json!({}),
            json!({"message": ""}),
            json!({"message": null}),
            json!({"conversationHistory": []}),
        ] {
            let resp = test::call_service(&app, chat_request("198.51.100.3", body).to_request()).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Message is required");
        }
        assert!(generator.prompts().is_empty());
    }

    #[actix_web::test]
    async fn test_whitespace_message_is_forwarded_unchanged() {
        let generator = ScriptedGenerator::replying("ok");
        let app = test::init_service(HttpServer::create_app(app_state(generator.clone()))).await;

        let req = chat_request("198.51.100.9", json!({"message": "   "})).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with("User:    \n\nHans:"));
    }

    #[actix_web::test]
    async fn test_empty_message_is_bad_request_even_when_limited() {
        let generator = ScriptedGenerator::replying("ok");
        let app = test::init_service(HttpServer::create_app(app_state(generator))).await;

        for _ in 0..20 {
            let req = chat_request("198.51.100.4", json!({"message": "hi"})).to_request();
            test::call_service(&app, req).await;
        }

        let req = chat_request("198.51.100.4", json!({"message": ""})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    // ==================== Rate limiting ====================

    #[actix_web::test]
    async fn test_sixteenth_request_is_rejected() {
        let generator = ScriptedGenerator::replying("ok");
        let app = test::init_service(HttpServer::create_app(app_state(generator.clone()))).await;

        for i in 0..15 {
            let req = chat_request("198.51.100.5", json!({"message": format!("q{}", i)})).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = chat_request("198.51.100.5", json!({"message": "one too many"})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(resp.headers().contains_key("retry-after"));

        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("Rate limit"));
        let reset = body["resetTime"].as_u64().unwrap();
        assert!(reset > 0 && reset <= 60);

        // Rejected calls never reach the model.
        assert_eq!(generator.prompts().len(), 15);
    }

    #[actix_web::test]
    async fn test_clients_are_limited_independently() {
        let generator = ScriptedGenerator::replying("ok");
        let app = test::init_service(HttpServer::create_app(app_state(generator))).await;

        for _ in 0..16 {
            let req = chat_request("198.51.100.6", json!({"message": "hi"})).to_request();
            test::call_service(&app, req).await;
        }

        let req = chat_request("198.51.100.7", json!({"message": "hi"})).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    // ==================== Upstream failures ====================

    #[actix_web::test]
    async fn test_upstream_signals_map_to_fixed_statuses() {
        let cases = [
            (
                ProviderError::quota_exceeded("gemini", "RESOURCE_EXHAUSTED"),
                StatusCode::TOO_MANY_REQUESTS,
                "API quota exceeded",
            ),
            (
                ProviderError::invalid_credentials("gemini", "API key not valid"),
                StatusCode::UNAUTHORIZED,
                "Invalid API key",
            ),
            (
                ProviderError::api("gemini", 503, "model overloaded"),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ),
        ];

        for (error, status, title) in cases {
            let app = test::init_service(HttpServer::create_app(app_state(
                ScriptedGenerator::failing(error),
            )))
            .await;
            let req = chat_request("198.51.100.8", json!({"message": "hi"})).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], title);
            assert!(!body.to_string().contains("overloaded"));
        }
    }

    // ==================== Other routes ====================

    #[actix_web::test]
    async fn test_health_and_models() {
        let app = test::init_service(HttpServer::create_app(app_state(
            ScriptedGenerator::replying("ok"),
        )))
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "OK");

        let req = test::TestRequest::get().uri("/api/models").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["current_model"], "gemini-1.5-flash");
    }
}
