//! JSON error body shared by every service.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domains::operations::Operands;

/// Error payload. Every failure response carries at least `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operands: Option<Operands>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Create a body with only an error message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            operands: None,
            details: None,
        }
    }

    /// Attach the offending operands.
    pub fn with_operands(mut self, operands: Operands) -> Self {
        self.operands = Some(operands);
        self
    }

    /// Attach free-text details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Pair the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    ErrorBody::new("Not found").into_response_with(StatusCode::NOT_FOUND)
}

/// Fallback for known routes hit with a method other than `GET`.
pub async fn method_not_allowed() -> Response {
    ErrorBody::new("Method not allowed").into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}
