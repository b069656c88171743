//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;

// The one place provider failures are mapped onto the public taxonomy.
impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::QuotaExceeded { message, .. } => GatewayError::QuotaExceeded(message),
            ProviderError::InvalidCredentials { message, .. } => {
                GatewayError::InvalidCredentials(message)
            }
            ProviderError::Timeout { message, .. } => GatewayError::Timeout(message),
            other @ (ProviderError::Network { .. }
            | ProviderError::Api { .. }
            | ProviderError::ResponseParsing { .. }
            | ProviderError::Configuration { .. }) => GatewayError::Upstream(other.to_string()),
        }
    }
}
