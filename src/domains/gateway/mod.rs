//! Gateway domain module.
//!
//! The gateway is the single public entry point. It checks that both
//! operands are present, forwards the request to the operation service named
//! by the path, and relays the reply.
//!
//! ## Failure translation
//!
//! Any backend failure (connection error, timeout, non-2xx status, non-JSON
//! body) becomes `500 {"error": "<Operation> service unavailable", "details"}`.
//! This includes the backend's own 400s, so a caller cannot tell bad input
//! from an unreachable service. `GATEWAY_RELAY_CLIENT_ERRORS=true` relays
//! backend 4xx JSON bodies instead.

mod backend;
mod error;
mod handlers;
mod routing;
pub mod router;
mod service;

pub use backend::{Backend, BackendReply, HttpBackend, build_client};
pub use error::{BackendError, GatewayError};
pub use router::build_gateway_router;
pub use routing::RoutingTable;
pub use service::GatewayService;
