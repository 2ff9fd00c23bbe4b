//! Calculator services entry point.
//!
//! Loads configuration, initializes logging, and serves the configured role
//! (gateway or one operation service) until shutdown.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

use calc_services::core::{CalcServer, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();

    CalcServer::new(config).run().await?;

    info!("Server shutting down");

    Ok(())
}

/// Map a configured level name onto a tracing level, falling back to `info`.
fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// Install the stderr subscriber.
///
/// The configured level is only the default; a `RUST_LOG` value wins.
fn init_logging(level: &str) {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(level).into())
        .from_env_lossy();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN "), LevelFilter::WARN);
        assert_eq!(parse_level("off"), LevelFilter::OFF);
        assert_eq!(parse_level("verbose"), LevelFilter::INFO);
    }
}
