//! Core module containing shared infrastructure components.
//!
//! Configuration, process-level errors, the shared JSON error body, server
//! assembly, and the HTTP transport.

pub mod config;
pub mod error;
pub mod response;
pub mod server;
pub mod transport;

pub use config::{Config, Role};
pub use error::{Error, Result};
pub use response::ErrorBody;
pub use server::CalcServer;
pub use transport::{HttpConfig, HttpTransport};
