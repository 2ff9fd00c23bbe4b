//! Operations domain module.
//!
//! An operation service computes one binary arithmetic operation over two
//! operands taken from the query string.
//!
//! ## Architecture
//!
//! - `definitions/` - One file per operation (add, subtract, multiply, divide)
//! - `registry.rs` - Lookup of operation definitions by kind, path or label
//! - `parse.rs` - Lenient numeric parsing of raw operand text
//! - `service.rs` - Parse, validate and compute
//! - `handlers.rs` / `router.rs` - HTTP surface
//! - `error.rs` - Operation-specific error types

pub mod definitions;
mod error;
mod handlers;
mod models;
mod parse;
mod registry;
pub mod router;
mod service;

pub use definitions::{OperationDef, OperationKind};
pub use error::OperationError;
pub use models::{OperandQuery, Operands, OperationResult};
pub use parse::parse_operand;
pub use registry::OperationRegistry;
pub use router::build_operation_router;
pub use service::OperationService;
