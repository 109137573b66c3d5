//! Gateway response types.
//!
//! Responses are flat JSON echoes of what the caller sent, plus a
//! message; there is no envelope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{TransactionId, TransactionType};

/// Response body for a transaction lookup (GET).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// Echoed transaction identifier.
    pub transaction_id: TransactionId,
    /// Echoed transaction type.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Echoed transaction amount.
    pub amount: f64,
    /// Gateway message.
    pub message: String,
}

/// Response body for a transaction submission (POST).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Request ID assigned by the gateway.
    pub request_id: Uuid,
    /// Echoed body identifier.
    pub body_id: TransactionId,
    /// Echoed transaction type.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Echoed transaction amount.
    pub amount: f64,
    /// Gateway message.
    pub message: String,
}

/// Response body for a CORS preflight (OPTIONS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreflightInfo {
    /// Request time as epoch milliseconds.
    pub request_time: i64,
    /// Caller's User-Agent, or "unknown".
    pub agent: String,
    /// Gateway message.
    pub message: String,
}
