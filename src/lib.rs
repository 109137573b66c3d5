//! txgate - Transaction gateway client and echo service
//!
//! This crate provides a small client for a transaction gateway API:
//! three stateless operations (query-parameterized GET, JSON-body POST,
//! bodiless OPTIONS) against one configured base URL, each resolving to
//! the decoded JSON response or a typed transport/decode error. The
//! matching echo service is included, both as a local stand-in for the
//! remote gateway and as the test double the client tests run against.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`client`] - Gateway HTTP client
//! - [`config`] - Configuration file parsing and validation
//! - [`error`] - Error types and error handling
//! - [`gateway`] - Gateway echo service
//! - [`model`] - Transaction wire types

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;

// Re-exports for convenience
pub use cli::Cli;
pub use client::GatewayClient;
pub use config::Config;
pub use error::{ErrorCode, Result, TxGateError};
pub use gateway::serve;
