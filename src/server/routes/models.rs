//! Model listing endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub available_models: Vec<String>,
    pub current_model: String,
    pub free_tier: bool,
}

/// `GET /api/models`
pub async fn list_models(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let gemini = state.config.gemini();
    Ok(HttpResponse::Ok().json(ModelsResponse {
        available_models: gemini.available_models.clone(),
        current_model: state.chat.model().to_string(),
        free_tier: true,
    }))
}
