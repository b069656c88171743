//! HTTP server for the chat proxy
//!
//! Built on actix-web: shared [`AppState`], request-id and rate-limit
//! middleware, and the `/api` routes.

pub mod builder;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server, serve};
pub use server::HttpServer;
pub use state::AppState;
