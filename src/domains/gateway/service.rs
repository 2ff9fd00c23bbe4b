//! Gateway service - validates operands and forwards to the backend.

use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use super::backend::{Backend, BackendReply, HttpBackend, build_client};
use super::error::{BackendError, GatewayError};
use super::routing::RoutingTable;
use crate::core::config::GatewayConfig;
use crate::domains::operations::{OperandQuery, OperationKind, OperationRegistry};

/// Forwards arithmetic requests to the operation services.
///
/// Holds no per-request state; clones share the same backend client.
#[derive(Clone)]
pub struct GatewayService {
    routes: RoutingTable,
    backend: Arc<dyn Backend>,
    relay_client_errors: bool,
}

impl GatewayService {
    /// Create a gateway over an arbitrary backend.
    pub fn new(routes: RoutingTable, backend: Arc<dyn Backend>) -> Self {
        Self {
            routes,
            backend,
            relay_client_errors: false,
        }
    }

    /// Create a gateway calling the configured backends over HTTP.
    pub fn from_config(config: &GatewayConfig) -> reqwest::Result<Self> {
        let client = build_client(config.timeout_secs)?;
        let service = Self::new(config.routes.clone(), Arc::new(HttpBackend::new(client)))
            .with_client_error_relay(config.relay_client_errors);
        Ok(service)
    }

    /// Relay backend 4xx JSON bodies instead of collapsing them into
    /// "service unavailable".
    pub fn with_client_error_relay(mut self, enabled: bool) -> Self {
        self.relay_client_errors = enabled;
        self
    }

    /// The routing table in use.
    pub fn routes(&self) -> &RoutingTable {
        &self.routes
    }

    /// Forward one request.
    ///
    /// Missing or empty operands are rejected here and never reach the
    /// backend. Operand text is passed through unparsed.
    #[instrument(skip(self, query), fields(operation = %kind))]
    pub async fn forward(
        &self,
        kind: OperationKind,
        query: &OperandQuery,
    ) -> Result<BackendReply, GatewayError> {
        let Some((a, b)) = query.both() else {
            debug!("Rejecting request without both operands");
            return Err(GatewayError::MissingParameters);
        };

        let url = self.routes.endpoint(kind);
        match self.backend.call(&url, a, b).await {
            Ok(reply) => Ok(reply),
            Err(BackendError::Status { status, body })
                if self.relay_client_errors
                    && status.is_client_error()
                    && serde_json::from_slice::<serde::de::IgnoredAny>(&body).is_ok() =>
            {
                debug!("Relaying backend client error {}", status);
                Ok(BackendReply { status, body })
            }
            Err(e) => {
                warn!("{} service error: {}", kind.title(), e);
                Err(GatewayError::unavailable(kind, e.to_string()))
            }
        }
    }

    /// Static descriptor listing the operations and their backends.
    pub fn info(&self) -> Value {
        let mut endpoints = Map::new();
        let mut microservices = Map::new();
        for def in OperationRegistry::all() {
            endpoints.insert(def.path.to_string(), json!(def.example));
            microservices.insert(def.path.to_string(), json!(self.routes.base_url(def.kind)));
        }

        json!({
            "service": "Calculator API Gateway",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": endpoints,
            "microservices": microservices,
        })
    }

    /// Static welcome message served at `/`.
    pub fn welcome() -> Value {
        json!({
            "message": "Welcome to Calculator Microservices",
            "description": "Four arithmetic services behind a single HTTP gateway",
            "try": "Visit /info for available endpoints",
            "example": "/add?a=10&b=5",
        })
    }

    /// Health status message.
    pub fn health() -> Value {
        json!({ "status": "Gateway is healthy" })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use http::StatusCode;
    use std::sync::Mutex;

    /// Records calls and answers with a canned result.
    pub(crate) struct MockBackend {
        pub calls: Mutex<Vec<(String, String, String)>>,
        reply: fn() -> Result<BackendReply, BackendError>,
    }

    impl MockBackend {
        pub(crate) fn new(reply: fn() -> Result<BackendReply, BackendError>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                reply,
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Backend for MockBackend {
        async fn call(&self, url: &str, a: &str, b: &str) -> Result<BackendReply, BackendError> {
            self.calls
                .lock()
                .unwrap()
                .push((url.to_string(), a.to_string(), b.to_string()));
            (self.reply)()
        }
    }

    pub(crate) fn ok_reply() -> Result<BackendReply, BackendError> {
        Ok(BackendReply {
            status: StatusCode::OK,
            body: Bytes::from_static(br#"{"operation":"addition","result":8}"#),
        })
    }

    pub(crate) fn refused() -> Result<BackendReply, BackendError> {
        Err(BackendError::transport("connect ECONNREFUSED"))
    }

    fn bad_request() -> Result<BackendReply, BackendError> {
        Err(BackendError::Status {
            status: StatusCode::BAD_REQUEST,
            body: Bytes::from_static(br#"{"error":"Division by zero is not allowed"}"#),
        })
    }

    fn query(a: Option<&str>, b: Option<&str>) -> OperandQuery {
        OperandQuery {
            a: a.map(String::from),
            b: b.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_forwards_verbatim_to_routed_backend() {
        let backend = MockBackend::new(ok_reply);
        let gateway = GatewayService::new(RoutingTable::default(), backend.clone());

        let reply = gateway
            .forward(OperationKind::Addition, &query(Some("5"), Some("abc")))
            .await
            .unwrap();
        assert_eq!(reply.status, StatusCode::OK);

        let calls = backend.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[(
                "http://localhost:3001/add".to_string(),
                "5".to_string(),
                "abc".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_missing_operands_never_reach_backend() {
        let backend = MockBackend::new(ok_reply);
        let gateway = GatewayService::new(RoutingTable::default(), backend.clone());

        for q in [
            query(None, Some("1")),
            query(Some("1"), None),
            query(Some(""), Some("1")),
            query(None, None),
        ] {
            let err = gateway.forward(OperationKind::Division, &q).await.unwrap_err();
            assert!(matches!(err, GatewayError::MissingParameters));
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_is_unavailable() {
        let gateway = GatewayService::new(RoutingTable::default(), MockBackend::new(refused));

        let err = gateway
            .forward(OperationKind::Subtraction, &query(Some("1"), Some("2")))
            .await
            .unwrap_err();
        match err {
            GatewayError::Unavailable { operation, details } => {
                assert_eq!(operation, OperationKind::Subtraction);
                assert_eq!(details, "connect ECONNREFUSED");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_backend_client_error_collapses_by_default() {
        let gateway = GatewayService::new(RoutingTable::default(), MockBackend::new(bad_request));

        let err = gateway
            .forward(OperationKind::Division, &query(Some("20"), Some("0")))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Division service unavailable");
    }

    #[tokio::test]
    async fn test_backend_client_error_relayed_when_enabled() {
        let gateway = GatewayService::new(RoutingTable::default(), MockBackend::new(bad_request))
            .with_client_error_relay(true);

        let reply = gateway
            .forward(OperationKind::Division, &query(Some("20"), Some("0")))
            .await
            .unwrap();
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8_lossy(&reply.body).contains("Division by zero"));
    }

    #[test]
    fn test_info_lists_backends() {
        let routes = RoutingTable::default().with_route(OperationKind::Division, "http://div:9");
        let gateway = GatewayService::new(routes, MockBackend::new(ok_reply));

        let info = gateway.info();
        assert_eq!(info["microservices"]["add"], "http://localhost:3001");
        assert_eq!(info["microservices"]["divide"], "http://div:9");
        assert_eq!(info["endpoints"]["multiply"], "/multiply?a=6&b=7");
    }
}
