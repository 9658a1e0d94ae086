//! Logging setup.
//!
//! Logs go to stderr so the STDIO transport keeps stdout for protocol
//! messages. `RUST_LOG` directives are honored on top of the configured level.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a configured level name to a tracing level, case-insensitively.
///
/// Unknown names fall back to `INFO`.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global fmt subscriber.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::from_default_env().add_directive(parse_level(level).into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
