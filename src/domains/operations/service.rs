//! Operation service - computes one arithmetic operation per request.

use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::definitions::{OperationDef, OperationKind};
use super::error::OperationError;
use super::models::{OperandQuery, Operands, OperationResult};
use super::parse::parse_operand;

/// Service for a single arithmetic operation.
///
/// Stateless: every call parses, validates and computes independently.
#[derive(Debug, Clone, Copy)]
pub struct OperationService {
    def: &'static OperationDef,
    version: &'static str,
}

impl OperationService {
    /// Create the service for the given operation.
    pub fn new(kind: OperationKind) -> Self {
        Self {
            def: kind.def(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// The operation this service computes.
    pub fn def(&self) -> &'static OperationDef {
        self.def
    }

    /// Parse both operands and apply the operation.
    ///
    /// Parsing happens strictly before any domain check, so `a=foo&b=0` on
    /// the division service is an invalid-input error, not division by zero.
    #[instrument(skip_all, fields(operation = %self.def.kind))]
    pub fn calculate(&self, query: &OperandQuery) -> Result<OperationResult, OperationError> {
        let (Some(a), Some(b)) = (
            parse_operand(query.a.as_deref()),
            parse_operand(query.b.as_deref()),
        ) else {
            debug!(a = ?query.a, b = ?query.b, "Rejecting non-numeric operands");
            return Err(OperationError::InvalidInput);
        };

        let result = self.def.apply(a, b)?;
        debug!(a, b, result, "Computed");

        Ok(OperationResult::new(
            self.def.kind,
            Operands { a, b },
            result,
        ))
    }

    /// Health status message.
    pub fn health(&self) -> Value {
        json!({ "status": format!("{} service is healthy", self.def.title) })
    }

    /// Static service descriptor served at `/`.
    pub fn descriptor(&self) -> Value {
        let mut descriptor = json!({
            "service": format!("{} Microservice", self.def.title),
            "version": self.version,
            "endpoint": self.def.example,
        });
        if let Some(note) = self.def.note {
            descriptor["note"] = json!(note);
        }
        descriptor
    }
}
