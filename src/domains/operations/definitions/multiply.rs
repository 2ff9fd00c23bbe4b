//! Multiplication.

use super::{OperationDef, OperationKind};
use crate::domains::operations::OperationError;

pub const MULTIPLY: OperationDef = OperationDef {
    kind: OperationKind::Multiplication,
    path: "multiply",
    label: "multiplication",
    title: "Multiplication",
    default_port: 3003,
    url_env: "MUL_SERVICE_URL",
    example: "/multiply?a=6&b=7",
    note: None,
    compute: multiply,
};

fn multiply(a: f64, b: f64) -> Result<f64, OperationError> {
    Ok(a * b)
}
