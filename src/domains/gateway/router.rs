//! Router for the gateway.

use axum::{
    Router,
    extract::{RawQuery, State},
    routing::get,
};

use super::handlers::{health, info, proxy, root};
use super::service::GatewayService;
use crate::core::response::{method_not_allowed, not_found};
use crate::domains::operations::OperationRegistry;

/// Build the gateway router: `/`, `/health`, `/info` and one forwarding
/// route per operation.
pub fn build_gateway_router(service: GatewayService) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/", get(root));

    for def in OperationRegistry::all() {
        let kind = def.kind;
        router = router.route(
            &format!("/{}", def.path),
            get(
                move |State(service): State<GatewayService>, RawQuery(query): RawQuery| {
                    proxy(service, kind, query)
                },
            ),
        );
    }

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(service)
}
