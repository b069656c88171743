//! Error handling for the gateway
//!
//! One error taxonomy for the whole crate. Provider failures are classified
//! into exactly one kind at a single conversion point, and every kind maps to
//! a fixed HTTP status and a short client-facing message.

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::ErrorBody;
pub use types::{GatewayError, Result};
