//! Rate limiting middleware
//!
//! Runs the sliding-window check before the handler and leaves the
//! [`RateLimitDecision`] in the request extensions. The chat handler turns a
//! rejection into a 429 after validating the body, so a malformed request is
//! always answered with 400.

use crate::core::rate_limiter::RateLimitDecision;
use crate::server::middleware::helpers::client_id;
use crate::server::state::AppState;
use actix_web::HttpMessage;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::web;
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Rate limit middleware for Actix-web
pub struct RateLimitMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RateLimitMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for rate limit middleware
pub struct RateLimitMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                warn!("Rate limiter has no application state, request passes unchecked");
                return service.call(req).await;
            };

            let key = client_id(&req, state.config.rate_limit().trust_forwarded_for);
            let decision = match state.limiter.check_and_record(&key).await {
                Ok(decision) => Some(decision),
                Err(e) => {
                    // Fail open: a store outage must not take chat down
                    warn!("Rate limit store error for {}: {}", key, e);
                    None
                }
            };

            if let Some(decision) = &decision {
                if !decision.allowed {
                    debug!(
                        "Client {} over limit ({}/{}), reset in {}s",
                        key, decision.current_count, decision.limit, decision.reset_after_secs
                    );
                }
                req.extensions_mut().insert(decision.clone());
            }

            let mut res = service.call(req).await?;
            if let Some(decision) = decision.filter(|_| state.limiter.is_enabled()) {
                insert_limit_headers(&mut res, &decision);
            }
            Ok(res)
        })
    }
}

fn insert_limit_headers<B>(res: &mut ServiceResponse<B>, decision: &RateLimitDecision) {
    let headers = res.headers_mut();
    headers.insert(
        HeaderName::from_static("x-ratelimit-limit"),
        HeaderValue::from(decision.limit),
    );
    headers.insert(
        HeaderName::from_static("x-ratelimit-remaining"),
        HeaderValue::from(decision.remaining),
    );
}
