//! Configuration management for the calculator services.
//!
//! Configuration is read once at startup into an immutable [`Config`] and
//! handed to each component at construction. Nothing reads the environment
//! after that.

use super::error::{Error, Result};
use super::transport::HttpConfig;
use crate::domains::gateway::RoutingTable;
use crate::domains::operations::{OperationKind, OperationRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Default gateway listen port.
pub const GATEWAY_PORT: u16 = 3000;

/// Default bound on each gateway -> backend call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Which service this process runs.
    pub role: Role,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Gateway backends and outbound call policy.
    pub gateway: GatewayConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Backend base URL per operation.
    pub routes: RoutingTable,

    /// Timeout for each backend call, in seconds.
    pub timeout_secs: u64,

    /// Relay backend 4xx JSON bodies instead of reporting the backend as
    /// unavailable.
    pub relay_client_errors: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            routes: RoutingTable::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            relay_client_errors: false,
        }
    }
}

/// The service a process plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Public entry point forwarding to the operation services.
    #[default]
    Gateway,
    /// One arithmetic operation service.
    Operation(OperationKind),
}

impl Role {
    /// Port this role listens on when `PORT` is unset.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Gateway => GATEWAY_PORT,
            Self::Operation(kind) => kind.def().default_port,
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("gateway") {
            return Ok(Self::Gateway);
        }
        OperationRegistry::lookup(s)
            .map(|def| Self::Operation(def.kind))
            .ok_or_else(|| {
                Error::config(format!(
                    "unknown role '{}', expected gateway, {}",
                    s,
                    OperationRegistry::paths().join(", ")
                ))
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gateway => f.write_str("gateway"),
            Self::Operation(kind) => write!(f, "{} service", kind),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let role = Role::default();
        Self {
            server: ServerConfig {
                name: "calc-services".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            role,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::with_port(role.default_port()),
            gateway: GatewayConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables (and `.env`, if any).
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `CALC_ROLE` | `gateway` |
    /// | `HOST` / `PORT` | `0.0.0.0` / role port |
    /// | `CALC_CORS` | `true` |
    /// | `CALC_LOG_LEVEL` | `info` |
    /// | `ADD_SERVICE_URL` .. `DIV_SERVICE_URL` | `http://localhost:3001..3004` |
    /// | `GATEWAY_TIMEOUT_SECS` | `10` |
    /// | `GATEWAY_RELAY_CLIENT_ERRORS` | `false` |
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(role) = lookup("CALC_ROLE") {
            config.role = role.parse()?;
        }

        if let Some(level) = lookup("CALC_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.http = HttpConfig::from_lookup(&lookup, config.role.default_port())?;

        config.gateway.routes = RoutingTable::from_lookup(&lookup);

        if let Some(timeout) = lookup("GATEWAY_TIMEOUT_SECS") {
            config.gateway.timeout_secs = timeout
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    Error::config(format!(
                        "GATEWAY_TIMEOUT_SECS must be a positive integer, got '{}'",
                        timeout
                    ))
                })?;
        }

        if let Some(relay) = lookup("GATEWAY_RELAY_CLIENT_ERRORS") {
            config.gateway.relay_client_errors = matches!(
                relay.trim().to_lowercase().as_str(),
                "true" | "1" | "yes"
            );
        }

        Ok(config)
    }

    /// Log the effective configuration.
    pub fn log_summary(&self) {
        info!("Role: {}", self.role);
        if self.role == Role::Gateway {
            for (kind, url) in self.gateway.routes.iter() {
                info!("  → {:<8} {}", kind.path(), url);
            }
            info!("  → timeout  {}s", self.gateway.timeout_secs);
            if self.gateway.relay_client_errors {
                info!("  → backend 4xx bodies are relayed");
            }
        }
    }
}
