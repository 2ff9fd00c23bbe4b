//! Request and response records for arithmetic calls.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::definitions::OperationKind;

/// Raw operands as they appear in the query string.
///
/// Absence and emptiness are kept distinct here; callers decide how to treat
/// an empty value. When a key repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandQuery {
    pub a: Option<String>,
    pub b: Option<String>,
}

impl OperandQuery {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(raw.unwrap_or_default()).unwrap_or_default();

        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "a" if query.a.is_none() => query.a = Some(value),
                "b" if query.b.is_none() => query.b = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Both operands, if both are present and non-empty.
    pub fn both(&self) -> Option<(&str, &str)> {
        let a = self.a.as_deref().filter(|v| !v.is_empty())?;
        let b = self.b.as_deref().filter(|v| !v.is_empty())?;
        Some((a, b))
    }
}

/// The two numeric operands of a computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operands {
    #[serde(serialize_with = "serialize_number")]
    pub a: f64,
    #[serde(serialize_with = "serialize_number")]
    pub b: f64,
}

/// Successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub operation: OperationKind,
    pub operands: Operands,
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
    /// UTC creation time, RFC 3339 with millisecond precision.
    pub timestamp: String,
}

/// Whole `f64` values up to this magnitude are exact integers.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Write whole numbers as JSON integers (`8`, not `8.0`).
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl OperationResult {
    /// Record a result stamped with the current time.
    pub fn new(operation: OperationKind, operands: Operands, result: f64) -> Self {
        Self {
            operation,
            operands,
            result,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
