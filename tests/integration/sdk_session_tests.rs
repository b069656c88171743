//! Chat session against a live proxy on an ephemeral port

#[cfg(test)]
mod tests {
    use crate::common::{ScriptedGenerator, app_state};
    use bento_gateway::core::providers::ProviderError;
    use bento_gateway::sdk::{ChatSession, GREETING, Sender};
    use bento_gateway::server::HttpServer;

    async fn spawn_proxy(generator: std::sync::Arc<ScriptedGenerator>) -> String {
        let state = app_state(generator);
        let server = actix_web::HttpServer::new(move || HttpServer::create_app(state.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/api", addr)
    }

    #[actix_web::test]
    async fn test_conversation_round_trip() {
        let generator = ScriptedGenerator::replying("Hans writes Rust.");
        let mut session = ChatSession::new(spawn_proxy(generator.clone()).await).unwrap();

        let reply = session.send("What does Hans do?").await.unwrap();
        assert_eq!(reply.text, "Hans writes Rust.");
        assert!(!reply.is_error);

        session.send("Anything else?").await.unwrap();
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(!prompts[1].contains(GREETING));
        assert!(prompts[1].contains("user: What does Hans do?\nassistant: Hans writes Rust."));
    }

    #[actix_web::test]
    async fn test_rate_limit_surfaces_as_friendly_text() {
        let generator = ScriptedGenerator::replying("ok");
        let mut session = ChatSession::new(spawn_proxy(generator).await).unwrap();

        for i in 0..15 {
            let entry = session.send(&format!("question {}", i)).await.unwrap();
            assert!(!entry.is_error);
        }

        let entry = session.send("one more").await.unwrap();
        assert!(entry.is_error);
        assert_eq!(entry.sender, Sender::Bot);
        assert_eq!(
            entry.text,
            "I'm receiving too many requests right now. Please wait a moment and try again."
        );
    }

    #[actix_web::test]
    async fn test_invalid_key_gets_generic_apology() {
        let generator =
            ScriptedGenerator::failing(ProviderError::invalid_credentials("gemini", "bad key"));
        let mut session = ChatSession::new(spawn_proxy(generator).await).unwrap();

        let entry = session.send("hello").await.unwrap();
        assert!(entry.is_error);
        assert_eq!(entry.text, "Sorry, I encountered an error. Please try again.");
        assert!(session.last_error().unwrap().contains("401"));
    }
}
