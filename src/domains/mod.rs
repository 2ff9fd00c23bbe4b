//! Business logic organized by service.
//!
//! - **operations**: the four arithmetic services
//! - **gateway**: the public entry point forwarding to them

pub mod gateway;
pub mod operations;
