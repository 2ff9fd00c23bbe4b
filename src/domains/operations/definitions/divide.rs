//! Division.
//!
//! The only operation with a domain rule: a zero divisor is rejected before
//! anything is computed, so `0 / 0` and `x / -0` never reach the FPU.

use super::{OperationDef, OperationKind};
use crate::domains::operations::OperationError;

pub const DIVIDE: OperationDef = OperationDef {
    kind: OperationKind::Division,
    path: "divide",
    label: "division",
    title: "Division",
    default_port: 3004,
    url_env: "DIV_SERVICE_URL",
    example: "/divide?a=20&b=4",
    note: Some("Division by zero returns error"),
    compute: divide,
};

fn divide(a: f64, b: f64) -> Result<f64, OperationError> {
    // -0.0 == 0.0 under IEEE-754
    if b == 0.0 {
        return Err(OperationError::division_by_zero(a, b));
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide() {
        assert_eq!(DIVIDE.apply(20.0, 4.0).unwrap(), 5.0);
        assert_eq!(DIVIDE.apply(1.0, 3.0).unwrap(), 1.0 / 3.0);
        assert_eq!(DIVIDE.apply(-9.0, 2.0).unwrap(), -4.5);
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        for (a, b) in [(20.0, 0.0), (0.0, 0.0), (-1.0, -0.0)] {
            match DIVIDE.apply(a, b) {
                Err(OperationError::DivisionByZero { operands }) => {
                    assert_eq!(operands.a, a);
                    assert_eq!(operands.b, b);
                }
                other => panic!("expected division by zero, got {:?}", other),
            }
        }
    }
}
