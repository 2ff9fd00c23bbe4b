//! Transport layer.
//!
//! Binds the HTTP listener and serves whichever router the process role
//! produced.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
