//! Subtraction.

use super::{OperationDef, OperationKind};
use crate::domains::operations::OperationError;

pub const SUBTRACT: OperationDef = OperationDef {
    kind: OperationKind::Subtraction,
    path: "subtract",
    label: "subtraction",
    title: "Subtraction",
    default_port: 3002,
    url_env: "SUB_SERVICE_URL",
    example: "/subtract?a=10&b=4",
    note: None,
    compute: subtract,
};

fn subtract(a: f64, b: f64) -> Result<f64, OperationError> {
    Ok(a - b)
}
