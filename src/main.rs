//! Temperature conversion MCP server entry point.
//!
//! Loads configuration, initializes logging, and starts the server with the
//! configured transport (HTTP on port 8000 unless overridden).

use anyhow::Result;

use temp_conversion_mcp_server::core::{Config, TransportService, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    logging::init_logging(&config.logging.level);

    TransportService::launch(config).await?;
    Ok(())
}
