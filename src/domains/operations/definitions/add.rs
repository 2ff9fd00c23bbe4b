//! Addition.

use super::{OperationDef, OperationKind};
use crate::domains::operations::OperationError;

pub const ADD: OperationDef = OperationDef {
    kind: OperationKind::Addition,
    path: "add",
    label: "addition",
    title: "Addition",
    default_port: 3001,
    url_env: "ADD_SERVICE_URL",
    example: "/add?a=5&b=3",
    note: None,
    compute: add,
};

fn add(a: f64, b: f64) -> Result<f64, OperationError> {
    Ok(a + b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(ADD.apply(5.0, 3.0).unwrap(), 8.0);
        assert_eq!(ADD.apply(-2.5, 2.5).unwrap(), 0.0);
        assert_eq!(ADD.apply(0.1, 0.2).unwrap(), 0.1 + 0.2);
    }
}
