//! Chat endpoint

use crate::core::chat::{ChatRequest, ChatService};
use crate::core::rate_limiter::RateLimitDecision;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpResponse, web};
use tracing::info;

/// `POST /api/chat`
///
/// Validation runs before the rate-limit verdict is applied, so a missing
/// message is a 400 even for a client that is over its limit.
pub async fn chat(
    state: web::Data<AppState>,
    decision: Option<web::ReqData<RateLimitDecision>>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, GatewayError> {
    ChatService::validate(&request)?;

    if let Some(decision) = decision.filter(|d| !d.allowed) {
        info!("Chat request rejected by rate limiter");
        return Err(GatewayError::rate_limited(decision.reset_after_secs));
    }

    let reply = state.chat.reply(&request).await?;
    Ok(HttpResponse::Ok().json(reply))
}
