//! Server assembly and lifecycle.
//!
//! [`CalcServer`] turns a [`Config`] into the router for the configured role
//! and runs it on the HTTP transport.

use axum::Router;
use std::sync::Arc;
use tracing::info;

use super::config::{Config, Role};
use super::error::Result;
use super::transport::HttpTransport;
use crate::domains::gateway::{GatewayService, build_gateway_router};
use crate::domains::operations::build_operation_router;

/// A configured calculator process: the gateway or one operation service.
#[derive(Clone)]
pub struct CalcServer {
    config: Arc<Config>,
}

impl CalcServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The configured role.
    pub fn role(&self) -> Role {
        self.config.role
    }

    /// Build the router for the configured role.
    pub fn router(&self) -> Result<Router> {
        let router = match self.config.role {
            Role::Gateway => {
                let service = GatewayService::from_config(&self.config.gateway)?;
                build_gateway_router(service)
            }
            Role::Operation(kind) => build_operation_router(kind),
        };
        Ok(router)
    }

    /// Serve until shutdown.
    pub async fn run(self) -> Result<()> {
        let router = self.router()?;
        info!("Serving {}", self.config.role);

        HttpTransport::new(self.config.http.clone())
            .run(router)
            .await?;
        Ok(())
    }
}
