//! Transaction wire types shared by the client and the gateway.
//!
//! These values are ephemeral: constructed fresh for a single call,
//! serialized onto the wire, and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TxGateError};

/// A transaction identifier, which callers supply either as an integer
/// or as an opaque string. Serialized untagged so `5` and `"tx-5"` both
/// round-trip exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    /// Numeric identifier.
    Number(u64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionId::Number(n) => write!(f, "{}", n),
            TransactionId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for TransactionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(TransactionId::from(s))
    }
}

impl From<u64> for TransactionId {
    fn from(n: u64) -> Self {
        TransactionId::Number(n)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) => TransactionId::Number(n),
            Err(_) => TransactionId::Text(s.to_string()),
        }
    }
}

/// The enumerated transaction type, `BUY` or `SELL` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Buy transaction.
    Buy,
    /// Sell transaction.
    Sell,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Buy => write!(f, "BUY"),
            TransactionType::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            _ => Err(format!("Invalid type '{}'. Valid types: BUY, SELL", s)),
        }
    }
}

/// Parameters of a transaction lookup, carried in the GET query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Transaction identifier.
    pub transaction_id: TransactionId,
    /// Transaction type.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Transaction amount.
    pub amount: f64,
}

impl TransactionQuery {
    /// Creates a query after validating the field constraints.
    pub fn new(
        transaction_id: impl Into<TransactionId>,
        kind: TransactionType,
        amount: f64,
    ) -> Result<Self> {
        let query = Self {
            transaction_id: transaction_id.into(),
            kind,
            amount,
        };
        query.validate()?;
        Ok(query)
    }

    /// Validates the field constraints.
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

/// Body of a transaction submission, carried as the JSON POST body
/// `{"bodyId": .., "type": .., "amount": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSubmission {
    /// Identifier echoed back by the gateway.
    pub body_id: TransactionId,
    /// Transaction type.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Transaction amount.
    pub amount: f64,
}

impl TransactionSubmission {
    /// Creates a submission after validating the field constraints.
    pub fn new(
        body_id: impl Into<TransactionId>,
        kind: TransactionType,
        amount: f64,
    ) -> Result<Self> {
        let submission = Self {
            body_id: body_id.into(),
            kind,
            amount,
        };
        submission.validate()?;
        Ok(submission)
    }

    /// Validates the field constraints.
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)
    }
}

/// Amounts must be finite and non-negative.
fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(TxGateError::invalid_request("amount must be a finite number"));
    }
    if amount < 0.0 {
        return Err(TxGateError::invalid_request("amount must be non-negative"));
    }
    Ok(())
}
