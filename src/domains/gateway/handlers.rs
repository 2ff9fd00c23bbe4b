//! HTTP handlers for the gateway.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use super::backend::BackendReply;
use super::error::GatewayError;
use super::service::GatewayService;
use crate::core::response::ErrorBody;
use crate::domains::operations::{OperandQuery, OperationKind};

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParameters => {
                ErrorBody::new(self.to_string()).into_response_with(StatusCode::BAD_REQUEST)
            }
            Self::Unavailable { ref details, .. } => ErrorBody::new(self.to_string())
                .with_details(details.clone())
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for BackendReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// Forward `/<op>?a=..&b=..` to the backend serving `kind`.
pub async fn proxy(
    service: GatewayService,
    kind: OperationKind,
    query: Option<String>,
) -> Result<BackendReply, GatewayError> {
    let query = OperandQuery::parse(query.as_deref());
    service.forward(kind, &query).await
}

/// Backend listing.
pub async fn info(State(service): State<GatewayService>) -> impl IntoResponse {
    Json(service.info())
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(GatewayService::health()))
}

/// Root handler - welcome message.
pub async fn root() -> impl IntoResponse {
    Json(GatewayService::welcome())
}
