//! HTTP request handlers.
//!
//! This module contains the three gateway endpoint handlers: a GET that
//! echoes the transaction query parameters, a POST that echoes the
//! submitted body, and an OPTIONS that answers a CORS preflight.

use crate::error::{ErrorCode, ErrorResponse, TxGateError};
use crate::gateway::response::{PreflightInfo, SubmissionReceipt, TransactionReceipt};
use crate::gateway::state::AppState;
use crate::model::{TransactionQuery, TransactionSubmission};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Message returned with every echoed transaction query.
const FETCH_MESSAGE: &str = "transaction query received";
/// Message returned with every echoed submission.
const SUBMIT_MESSAGE: &str = "transaction submission received";
/// Message returned with every preflight answer.
const PREFLIGHT_MESSAGE: &str = "gateway is reachable";

/// Transaction lookup handler.
///
/// GET /?transactionId=..&type=..&amount=..
pub async fn fetch(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TransactionQuery>, QueryRejection>,
) -> Response {
    state.increment_requests();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            state.increment_failed();
            warn!(error = %rejection.body_text(), "Rejecting malformed transaction query");
            return bad_request(format!("Invalid query string: {}", rejection.body_text()));
        }
    };

    if let Err(err) = query.validate() {
        state.increment_failed();
        return rejected(&err);
    }

    info!(
        transaction_id = %query.transaction_id,
        kind = %query.kind,
        amount = %query.amount,
        "Echoing transaction query"
    );

    let receipt = TransactionReceipt {
        transaction_id: query.transaction_id,
        kind: query.kind,
        amount: query.amount,
        message: FETCH_MESSAGE.to_string(),
    };

    state.increment_success();
    (StatusCode::OK, Json(receipt)).into_response()
}

/// Transaction submission handler.
///
/// POST / with body `{"bodyId": .., "type": .., "amount": ..}`
pub async fn submit(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TransactionSubmission>, JsonRejection>,
) -> Response {
    state.increment_requests();

    let Json(submission) = match body {
        Ok(body) => body,
        Err(rejection) => {
            state.increment_failed();
            warn!(error = %rejection.body_text(), "Rejecting malformed submission body");
            return bad_request(format!("Invalid request body: {}", rejection.body_text()));
        }
    };

    if let Err(err) = submission.validate() {
        state.increment_failed();
        return rejected(&err);
    }

    let request_id = Uuid::new_v4();

    info!(
        request_id = %request_id,
        body_id = %submission.body_id,
        kind = %submission.kind,
        amount = %submission.amount,
        "Echoing transaction submission"
    );

    let receipt = SubmissionReceipt {
        request_id,
        body_id: submission.body_id,
        kind: submission.kind,
        amount: submission.amount,
        message: SUBMIT_MESSAGE.to_string(),
    };

    state.increment_success();
    (StatusCode::OK, Json(receipt)).into_response()
}

/// CORS preflight handler.
///
/// OPTIONS / with no body
pub async fn preflight(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    state.increment_requests();

    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(agent = %agent, "Answering preflight");

    let info = PreflightInfo {
        request_time: Utc::now().timestamp_millis(),
        agent,
        message: PREFLIGHT_MESSAGE.to_string(),
    };

    state.increment_success();
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "OPTIONS,POST,GET"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        Json(info),
    )
        .into_response()
}

/// 400 answer for an extractor rejection.
fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(ErrorCode::InvalidRequest, message)),
    )
        .into_response()
}

/// Answer for a validation error, using the error's own code mapping.
fn rejected(err: &TxGateError) -> Response {
    let status = StatusCode::from_u16(err.code().http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from_error(err))).into_response()
}
