//! Gateway HTTP client API.
//!
//! This module provides the client for the transaction gateway: one
//! configured base URL, three stateless operations (GET, POST,
//! OPTIONS), and an opaque JSON value back.

use crate::config::{GatewayConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, TxGateError};
use crate::model::{TransactionQuery, TransactionSubmission};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for a transaction gateway endpoint.
///
/// Every operation is a single round trip: one outbound request, no
/// retries, no state shared between in-flight calls.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    /// HTTP client.
    http: Client,
    /// Base URL all requests target.
    base_url: String,
}

impl GatewayClient {
    /// Creates a new client for the given gateway base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the gateway (e.g., "https://gateway.example.com/prod/")
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| {
            TxGateError::config_with_source(format!("Invalid base URL '{}'", base_url), e)
        })?;

        let http = Client::builder()
            .user_agent(concat!("txgate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                TxGateError::config_with_source("Failed to create HTTP client".to_string(), e)
            })?;

        Ok(Self { http, base_url })
    }

    /// Creates a new client from gateway configuration.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::with_timeout(
            &config.base_url,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a transaction: one GET with the three values encoded as
    /// `&`-joined, percent-encoded query parameters.
    ///
    /// # Returns
    /// The decoded JSON response body.
    pub async fn fetch_transaction(&self, query: &TransactionQuery) -> Result<Value> {
        query.validate()?;

        debug!(
            url = %self.base_url,
            transaction_id = %query.transaction_id,
            kind = %query.kind,
            amount = %query.amount,
            "Fetching transaction"
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(query)
            .send()
            .await
            .map_err(|e| TxGateError::transport(&self.base_url, e))?;

        self.decode(response).await
    }

    /// Submits a transaction: one POST with the JSON-encoded object
    /// `{"bodyId": .., "type": .., "amount": ..}` and a matching
    /// `Content-Type: application/json`.
    ///
    /// # Returns
    /// The decoded JSON response body.
    pub async fn submit_transaction(&self, submission: &TransactionSubmission) -> Result<Value> {
        submission.validate()?;

        debug!(
            url = %self.base_url,
            body_id = %submission.body_id,
            kind = %submission.kind,
            amount = %submission.amount,
            "Submitting transaction"
        );

        let response = self
            .http
            .post(&self.base_url)
            .json(submission)
            .send()
            .await
            .map_err(|e| TxGateError::transport(&self.base_url, e))?;

        self.decode(response).await
    }

    /// Queries the gateway for permitted methods and headers: one
    /// OPTIONS request with no body.
    ///
    /// # Returns
    /// The decoded JSON response body.
    pub async fn query_options(&self) -> Result<Value> {
        debug!(url = %self.base_url, "Querying gateway options");

        let response = self
            .http
            .request(Method::OPTIONS, &self.base_url)
            .send()
            .await
            .map_err(|e| TxGateError::transport(&self.base_url, e))?;

        self.decode(response).await
    }

    // The status code is not inspected: a non-2xx answer with a JSON
    // body still resolves, matching the gateway contract.
    async fn decode(&self, response: reqwest::Response) -> Result<Value> {
        response
            .json::<Value>()
            .await
            .map_err(|e| TxGateError::decode(&self.base_url, e))
    }
}
