//! HTTP middleware implementations
//!
//! - Request ID tracking on every route
//! - Sliding-window rate limiting on the chat route

mod helpers;
mod rate_limit;
mod request_id;


pub use helpers::{client_id, normalize_ip};
pub use rate_limit::{RateLimitMiddleware, RateLimitMiddlewareService};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
