//! Calculator microservices.
//!
//! Four stateless arithmetic services (add, subtract, multiply, divide) and a
//! gateway that forwards `GET /<op>?a=..&b=..` to the matching service over
//! HTTP and relays the reply.
//!
//! # Architecture
//!
//! - **core**: configuration, process-level errors, server assembly and the
//!   HTTP transport
//! - **domains**: per-service logic
//!   - **operations**: operation definitions, parsing, computation
//!   - **gateway**: routing table, backend client, failure translation
//!
//! # Example
//!
//! ```rust,no_run
//! use calc_services::core::{CalcServer, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     CalcServer::new(config).run().await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{CalcServer, Config, Error, Result, Role};
