//! HTTP client module for txgate.
//!
//! This module provides the client for issuing transaction calls
//! against a gateway endpoint.

pub mod api;

#[cfg(test)]
mod api_tests;

pub use api::GatewayClient;
