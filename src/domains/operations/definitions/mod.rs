//! Arithmetic operation definitions.
//!
//! Each operation lives in its own file and exposes a single `const`
//! [`OperationDef`]. The definition carries everything the rest of the crate
//! needs to know about an operation: its URL path, its result label, the port
//! its service listens on by default and the environment variable the gateway
//! reads its backend URL from.

mod add;
mod divide;
mod multiply;
mod subtract;

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::OperationError;

pub use add::ADD;
pub use divide::DIVIDE;
pub use multiply::MULTIPLY;
pub use subtract::SUBTRACT;

/// The four supported arithmetic operations.
///
/// Serialized as the label reported in results (`"addition"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl OperationKind {
    /// All operations, in routing-table order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
        OperationKind::Division,
    ];

    /// Static definition for this operation.
    pub fn def(self) -> &'static OperationDef {
        match self {
            Self::Addition => &ADD,
            Self::Subtraction => &SUBTRACT,
            Self::Multiplication => &MULTIPLY,
            Self::Division => &DIVIDE,
        }
    }

    /// Result label, e.g. `"addition"`.
    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// URL path segment, e.g. `"add"`.
    pub fn path(self) -> &'static str {
        self.def().path
    }

    /// Capitalized name used in human-readable messages, e.g. `"Addition"`.
    pub fn title(self) -> &'static str {
        self.def().title
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static description of one arithmetic operation.
#[derive(Debug)]
pub struct OperationDef {
    pub kind: OperationKind,
    /// Path segment served by both the operation service and the gateway.
    pub path: &'static str,
    /// Label reported in the `operation` field of results.
    pub label: &'static str,
    pub title: &'static str,
    pub default_port: u16,
    /// Environment variable holding the gateway's backend base URL.
    pub url_env: &'static str,
    /// Example request shown in descriptors.
    pub example: &'static str,
    /// Extra remark shown in the service descriptor.
    pub note: Option<&'static str>,
    compute: fn(f64, f64) -> Result<f64, OperationError>,
}

impl OperationDef {
    /// Apply the operation to two parsed operands.
    ///
    /// Fails with [`OperationError::NonFiniteResult`] when the IEEE-754 result
    /// overflows, since such a value has no JSON representation.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, OperationError> {
        let result = (self.compute)(a, b)?;
        if !result.is_finite() {
            return Err(OperationError::non_finite(self.kind, a, b));
        }
        Ok(result)
    }

    /// Default backend base URL, used when `url_env` is unset.
    pub fn default_url(&self) -> String {
        format!("http://localhost:{}", self.default_port)
    }
}
