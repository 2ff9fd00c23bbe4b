//! HTTP listener configuration.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable permissive CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

impl HttpConfig {
    /// Default listener on the given port.
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }

    /// Read `HOST`, `PORT` and `CALC_CORS`, falling back to `default_port`.
    pub fn from_lookup<F>(lookup: F, default_port: u16) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                Error::config(format!("PORT must be a port number, got '{}'", raw))
            })?,
            None => default_port,
        };
        let host = lookup("HOST").unwrap_or_else(default_host);
        let enable_cors = lookup("CALC_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Ok(Self {
            port,
            host,
            enable_cors,
        })
    }

    /// Bind address, `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
