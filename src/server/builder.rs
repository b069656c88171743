//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from `config_path` (defaults when missing) and serve
pub async fn run_server<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path).await?;
    serve(config).await
}

/// Serve with an already loaded configuration
pub async fn serve(config: Config) -> Result<()> {
    info!("Starting bento gateway v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build().await?;
    let address = server.config().address();
    info!("Server starting at: http://{}", address);
    info!("API Endpoints:");
    info!("   POST /api/chat   - Chat with the portfolio assistant");
    info!("   GET  /api/health - Health check");
    info!("   GET  /api/models - Model list");

    server.start().await
}
