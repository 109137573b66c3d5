//! Error types and error handling for txgate.
//!
//! This module defines all error types used throughout the application,
//! including error codes, error responses for the gateway, and CLI exit
//! codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error codes for the gateway API and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// E001: Configuration file is invalid
    #[serde(rename = "E001")]
    ConfigInvalid,

    /// E002: Request carries invalid field values
    #[serde(rename = "E002")]
    InvalidRequest,

    /// E003: Network exchange could not complete
    #[serde(rename = "E003")]
    TransportError,

    /// E004: Response body is not valid JSON
    #[serde(rename = "E004")]
    DecodeError,
}

impl ErrorCode {
    /// Returns the error code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalid => "E001",
            ErrorCode::InvalidRequest => "E002",
            ErrorCode::TransportError => "E003",
            ErrorCode::DecodeError => "E004",
        }
    }

    /// Returns the default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ConfigInvalid => "Configuration file is invalid",
            ErrorCode::InvalidRequest => "Request is invalid",
            ErrorCode::TransportError => "Failed to complete the network exchange",
            ErrorCode::DecodeError => "Response body is not valid JSON",
        }
    }

    /// Returns the HTTP status code the gateway answers with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::ConfigInvalid => 500,
            ErrorCode::InvalidRequest => 400,
            ErrorCode::TransportError => 502,
            ErrorCode::DecodeError => 502,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CLI exit codes.
pub mod exit_code {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// General error
    pub const GENERAL_ERROR: i32 = 1;
    /// Configuration error
    pub const CONFIG_ERROR: i32 = 2;
    /// Transport error
    pub const TRANSPORT_ERROR: i32 = 3;
    /// Decode error
    pub const DECODE_ERROR: i32 = 4;
    /// Command line argument error
    pub const CLI_ERROR: i32 = 64;
}

/// The main error type for txgate.
#[derive(Debug, Error)]
pub enum TxGateError {
    /// Configuration file is invalid or cannot be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Caller-supplied request fields fail validation.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// The network exchange with the gateway could not complete.
    #[error("Transport error: {url}")]
    Transport {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The gateway answered, but the body is not parseable as JSON.
    #[error("Decode error: {url}")]
    Decode {
        url: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TxGateError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TxGateError::Config { .. } => ErrorCode::ConfigInvalid,
            TxGateError::InvalidRequest { .. } => ErrorCode::InvalidRequest,
            TxGateError::Transport { .. } => ErrorCode::TransportError,
            TxGateError::Decode { .. } => ErrorCode::DecodeError,
            TxGateError::Io(_) => ErrorCode::ConfigInvalid,
            TxGateError::Yaml(_) => ErrorCode::ConfigInvalid,
            TxGateError::Json(_) => ErrorCode::DecodeError,
        }
    }

    /// Returns the CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TxGateError::Config { .. } | TxGateError::Yaml(_) => exit_code::CONFIG_ERROR,
            TxGateError::Transport { .. } => exit_code::TRANSPORT_ERROR,
            TxGateError::Decode { .. } => exit_code::DECODE_ERROR,
            _ => exit_code::GENERAL_ERROR,
        }
    }

    /// Creates a configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        TxGateError::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error with a message and source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TxGateError::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        TxGateError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a transport error for the given URL.
    pub fn transport(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TxGateError::Transport {
            url: url.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a decode error for the given URL.
    pub fn decode(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TxGateError::Decode {
            url: url.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Error response body for the gateway API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "E002").
    pub code: ErrorCode,

    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates an error response from a TxGateError.
    pub fn from_error(error: &TxGateError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// Result type alias for txgate operations.
pub type Result<T> = std::result::Result<T, TxGateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::ConfigInvalid.as_str(), "E001");
        assert_eq!(ErrorCode::InvalidRequest.as_str(), "E002");
        assert_eq!(ErrorCode::TransportError.as_str(), "E003");
        assert_eq!(ErrorCode::DecodeError.as_str(), "E004");
    }

    #[test]
    fn test_error_code_default_message() {
        assert_eq!(
            ErrorCode::TransportError.default_message(),
            "Failed to complete the network exchange"
        );
        assert_eq!(
            ErrorCode::DecodeError.default_message(),
            "Response body is not valid JSON"
        );
    }

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
        assert_eq!(ErrorCode::InvalidRequest.http_status(), 400);
        assert_eq!(ErrorCode::TransportError.http_status(), 502);
        assert_eq!(ErrorCode::DecodeError.http_status(), 502);
    }

    #[test]
    fn test_txgate_error_code() {
        let err = TxGateError::config("bad yaml");
        assert_eq!(err.code(), ErrorCode::ConfigInvalid);

        let err = TxGateError::invalid_request("amount must be non-negative");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);

        let err = TxGateError::Transport {
            url: "http://gateway.local".to_string(),
            source: None,
        };
        assert_eq!(err.code(), ErrorCode::TransportError);

        let err = TxGateError::Decode {
            url: "http://gateway.local".to_string(),
            source: None,
        };
        assert_eq!(err.code(), ErrorCode::DecodeError);
    }

    #[test]
    fn test_txgate_error_exit_code() {
        let err = TxGateError::config("bad yaml");
        assert_eq!(err.exit_code(), exit_code::CONFIG_ERROR);

        let err = TxGateError::Transport {
            url: "http://gateway.local".to_string(),
            source: None,
        };
        assert_eq!(err.exit_code(), exit_code::TRANSPORT_ERROR);

        let err = TxGateError::Decode {
            url: "http://gateway.local".to_string(),
            source: None,
        };
        assert_eq!(err.exit_code(), exit_code::DECODE_ERROR);

        let err = TxGateError::invalid_request("bad type");
        assert_eq!(err.exit_code(), exit_code::GENERAL_ERROR);
    }

    #[test]
    fn test_error_display() {
        let err = TxGateError::Transport {
            url: "http://gateway.local/prod".to_string(),
            source: None,
        };
        assert_eq!(
            format!("{}", err),
            "Transport error: http://gateway.local/prod"
        );

        let err = TxGateError::invalid_request("amount must be non-negative");
        assert_eq!(
            format!("{}", err),
            "Invalid request: amount must be non-negative"
        );
    }

    #[test]
    fn test_error_response_from_error() {
        let err = TxGateError::Decode {
            url: "http://gateway.local".to_string(),
            source: None,
        };
        let response = ErrorResponse::from_error(&err);

        assert_eq!(response.code, ErrorCode::DecodeError);
        assert!(response.message.contains("gateway.local"));
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new(ErrorCode::InvalidRequest, "missing field: amount");
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"code\":\"E002\""));
        assert!(json.contains("missing field: amount"));
    }
}
