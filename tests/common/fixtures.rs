//! Application fixtures

use actix_web::{test, web};
use async_trait::async_trait;
use bento_gateway::config::Config;
use bento_gateway::core::chat::{ChatService, PromptBuilder, persona_preamble};
use bento_gateway::core::providers::{ProviderError, TextGenerator};
use bento_gateway::core::rate_limiter::SlidingWindowLimiter;
use bento_gateway::server::AppState;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Generator that returns a fixed outcome and remembers every prompt it saw
pub struct ScriptedGenerator {
    outcome: Result<String, ProviderError>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub fn failing(error: ProviderError) -> Arc<Self> {
        Self::with_outcome(Err(error))
    }

    pub fn with_outcome(outcome: Result<String, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn model(&self) -> &str {
        "gemini-1.5-flash"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcome.clone()
    }
}

/// Default configuration wired to `generator` with a fresh in-memory limiter
pub fn app_state(generator: Arc<ScriptedGenerator>) -> web::Data<AppState> {
    let config = Config::default();
    let limiter = SlidingWindowLimiter::in_memory(config.rate_limit());
    let chat = ChatService::new(
        generator,
        PromptBuilder::new(persona_preamble(), config.chat().history_limit),
        Duration::from_secs(5),
    );
    web::Data::new(AppState::new(config, limiter, chat))
}

/// `POST /api/chat` from the given client address
pub fn chat_request(ip: &str, body: Value) -> test::TestRequest {
    let peer: SocketAddr = format!("{}:51000", ip).parse().unwrap();
    test::TestRequest::post()
        .uri("/api/chat")
        .peer_addr(peer)
        .set_json(body)
}
