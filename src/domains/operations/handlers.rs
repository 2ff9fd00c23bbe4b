//! HTTP handlers for an operation service.

use axum::{
    Json,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use super::error::OperationError;
use super::models::{OperandQuery, OperationResult};
use super::service::OperationService;
use crate::core::response::ErrorBody;

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidInput => {
                ErrorBody::new(self.to_string()).into_response_with(StatusCode::BAD_REQUEST)
            }
            Self::DivisionByZero { operands } => ErrorBody::new(self.to_string())
                .with_operands(operands)
                .into_response_with(StatusCode::BAD_REQUEST),
            Self::NonFiniteResult { .. } | Self::Internal(_) => {
                error!("Internal fault: {}", self);
                ErrorBody::new("Internal server error")
                    .with_details(self.to_string())
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// Compute the operation from the `a` and `b` query parameters.
pub async fn calculate(
    State(service): State<OperationService>,
    RawQuery(query): RawQuery,
) -> Result<Json<OperationResult>, OperationError> {
    let query = OperandQuery::parse(query.as_deref());
    let result = service.calculate(&query)?;
    info!("{} = {}", result.operation, result.result);
    Ok(Json(result))
}

/// Health check endpoint.
pub async fn health(State(service): State<OperationService>) -> impl IntoResponse {
    (StatusCode::OK, Json(service.health()))
}

/// Root handler - service descriptor.
pub async fn root(State(service): State<OperationService>) -> impl IntoResponse {
    Json(service.descriptor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_internal_error_response() {
        let response = OperationError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Internal server error");
        assert_eq!(body.details.as_deref(), Some("Internal error: boom"));
    }
}
