//! Gateway-specific error types.

use thiserror::Error;

use crate::domains::operations::OperationKind;

/// Errors returned by the gateway to its callers.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// `a` or `b` missing from the query string (or empty).
    #[error("Parameters a and b are required")]
    MissingParameters,

    /// The backend call failed for any reason.
    ///
    /// Backend-reported 4xx responses land here too unless the gateway is
    /// configured to relay them.
    #[error("{} service unavailable", .operation.title())]
    Unavailable {
        operation: OperationKind,
        details: String,
    },
}

impl GatewayError {
    /// Create an "unavailable" error for the given operation.
    pub fn unavailable(operation: OperationKind, details: impl Into<String>) -> Self {
        Self::Unavailable {
            operation,
            details: details.into(),
        }
    }
}

/// Failure of a single outbound call to an operation service.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {}", .status.as_u16())]
    Status {
        status: http::StatusCode,
        body: bytes::Bytes,
    },

    /// The backend answered 2xx but the body is not JSON.
    #[error("Malformed response from backend: {0}")]
    MalformedBody(String),
}

impl BackendError {
    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }
}
