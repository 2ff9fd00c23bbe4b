//! HTTP transport implementation.
//!
//! Serves an axum router with request tracing and, optionally, permissive
//! CORS. Shuts down gracefully on Ctrl-C or SIGTERM.

use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{HttpConfig, TransportError, TransportResult};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Wrap `router` with the transport's layers.
    pub fn layered(&self, router: Router) -> Router {
        let router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn run(self, router: Router) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        self.serve(listener, router, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        router: Router,
        shutdown: F,
    ) -> TransportResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        let local = listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| self.address());
        info!("Ready - listening on {} (CORS {})", local, cors_status);
        info!("  → Health: GET /health");

        let app = self.layered(router);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(TransportError::ServeError)?;

        info!("Listener on {} closed", local);
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
