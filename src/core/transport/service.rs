//! Transport service - picks the configured transport and runs the server on it.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::{Config, McpServer, Result};

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an `McpServer` on one configured transport.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Validate `config`, build the server and serve until shutdown.
    pub async fn launch(config: Config) -> Result<()> {
        config.validate()?;

        info!("Starting {} v{}", config.server.name, config.server.version);

        let transport = Self::new(config.transport.clone());
        transport.run(McpServer::new(config)).await?;

        info!("Server shutting down");
        Ok(())
    }

    /// Serve `server` on the configured transport.
    ///
    /// Returns when the transport shuts down or the STDIO peer disconnects.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => {
                info!("Ready - communicating via stdin/stdout");
                server.serve_transport(rmcp::transport::stdio()).await
            }
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[tokio::test]
    async fn test_launch_rejects_invalid_config() {
        let mut config = Config::default();
        config.server.name = String::new();

        let result = TransportService::launch(config).await;
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_bind_failure_surfaces_as_transport_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let mut config = Config::default();
        config.transport = TransportConfig::http(port, "127.0.0.1");

        let result = TransportService::launch(config).await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }
}
