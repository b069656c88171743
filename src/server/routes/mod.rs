//! HTTP routes
//!
//! | Method | Path          | Handler             |
//! |--------|---------------|---------------------|
//! | POST   | `/api/chat`   | [`chat::chat`]      |
//! | GET    | `/api/health` | [`health::health_check`] |
//! | GET    | `/api/models` | [`models::list_models`]  |

pub mod chat;
pub mod health;
pub mod models;


use crate::server::middleware::RateLimitMiddleware;
use crate::utils::error::GatewayError;
use actix_web::web;
use tracing::debug;

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/chat")
                    .wrap(RateLimitMiddleware)
                    .route(web::post().to(chat::chat)),
            )
            .route("/health", web::get().to(health::health_check))
            .route("/models", web::get().to(models::list_models)),
    );
}

/// JSON extractor settings: size limit, and malformed bodies become 400s
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, req| {
            debug!("Rejected JSON body on {}: {}", req.path(), err);
            GatewayError::validation(format!("Invalid request body: {}", err)).into()
        })
}
