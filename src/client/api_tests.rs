//! Client tests against an in-process gateway.
//!
//! Each test binds the real gateway router (or a misbehaving stand-in)
//! to an ephemeral port and drives the client over the wire.

use crate::client::GatewayClient;
use crate::error::TxGateError;
use crate::gateway::state::AppState;
use crate::gateway::create_router;
use crate::model::{TransactionQuery, TransactionSubmission, TransactionType};
use axum::{routing::any, Router};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Binds the gateway to an ephemeral port and returns its base URL
/// together with the shared state for counter assertions.
async fn spawn_gateway() -> (String, Arc<AppState>) {
    let state = Arc::new(AppState::new());
    let router = create_router(state.clone());
    (spawn_router(router).await, state)
}

async fn spawn_router(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/", addr)
}

#[tokio::test]
async fn test_fetch_transaction_round_trip() {
    let (base_url, state) = spawn_gateway().await;
    let client = GatewayClient::new(base_url).unwrap();

    let query = TransactionQuery::new(1234u64, TransactionType::Buy, 250.0).unwrap();
    let value = client.fetch_transaction(&query).await.unwrap();

    // Query-string values travel as strings, so the id echoes as text.
    assert_eq!(value["transactionId"], json!("1234"));
    assert_eq!(value["type"], json!("BUY"));
    assert_eq!(value["amount"], json!(250.0));
    assert_eq!(value["message"], json!("transaction query received"));

    // Exactly one request, no retry.
    assert_eq!(state.stats.snapshot().requests_total, 1);
}

#[tokio::test]
async fn test_fetch_transaction_percent_encodes_query() {
    let (base_url, state) = spawn_gateway().await;
    let client = GatewayClient::new(base_url).unwrap();

    // An id with a space, an ampersand, and an equals sign survives the
    // query string only if the client percent-encodes it.
    let query = TransactionQuery::new("tx 99&x=y", TransactionType::Sell, 0.5).unwrap();
    let value = client.fetch_transaction(&query).await.unwrap();

    assert_eq!(value["transactionId"], json!("tx 99&x=y"));
    assert_eq!(value["type"], json!("SELL"));
    assert_eq!(state.stats.snapshot().requests_total, 1);
}

#[tokio::test]
async fn test_fetch_transaction_validates_before_sending() {
    let (base_url, state) = spawn_gateway().await;
    let client = GatewayClient::new(base_url).unwrap();

    let query = TransactionQuery {
        transaction_id: 1u64.into(),
        kind: TransactionType::Buy,
        amount: -1.0,
    };
    let err = client.fetch_transaction(&query).await.unwrap_err();

    assert!(matches!(err, TxGateError::InvalidRequest { .. }));
    // Nothing went out on the wire.
    assert_eq!(state.stats.snapshot().requests_total, 0);
}

#[tokio::test]
async fn test_submit_transaction_round_trip() {
    let (base_url, state) = spawn_gateway().await;
    let client = GatewayClient::new(base_url).unwrap();

    let submission = TransactionSubmission::new(5u64, TransactionType::Buy, 600.0).unwrap();
    let value = client.submit_transaction(&submission).await.unwrap();

    // The JSON body preserves the numeric id exactly.
    assert_eq!(value["bodyId"], json!(5));
    assert_eq!(value["type"], json!("BUY"));
    assert_eq!(value["amount"], json!(600.0));
    assert_eq!(value["message"], json!("transaction submission received"));
    assert!(value["requestId"].is_string());

    assert_eq!(state.stats.snapshot().requests_total, 1);
}

#[tokio::test]
async fn test_query_options_round_trip() {
    let (base_url, state) = spawn_gateway().await;
    let client = GatewayClient::new(base_url).unwrap();

    let value = client.query_options().await.unwrap();

    assert_eq!(value["message"], json!("gateway is reachable"));
    assert_eq!(
        value["agent"],
        json!(concat!("txgate/", env!("CARGO_PKG_VERSION")))
    );
    assert!(value["requestTime"].as_i64().unwrap() > 0);

    assert_eq!(state.stats.snapshot().requests_total, 1);
}

#[tokio::test]
async fn test_operations_resolve_with_opaque_body() {
    // The client imposes no schema: whatever JSON the gateway answers
    // with is handed back as-is.
    let router = Router::new().route(
        "/",
        any(|| async { axum::Json(json!({"status": "ok"})) }),
    );
    let base_url = spawn_router(router).await;
    let client = GatewayClient::new(base_url).unwrap();

    let query = TransactionQuery::new(1u64, TransactionType::Buy, 1.0).unwrap();
    assert_eq!(
        client.fetch_transaction(&query).await.unwrap(),
        json!({"status": "ok"})
    );

    let submission = TransactionSubmission::new(1u64, TransactionType::Sell, 1.0).unwrap();
    assert_eq!(
        client.submit_transaction(&submission).await.unwrap(),
        json!({"status": "ok"})
    );

    assert_eq!(client.query_options().await.unwrap(), json!({"status": "ok"}));
}

#[tokio::test]
async fn test_non_2xx_json_body_still_resolves() {
    // The status code is not inspected; a JSON error body resolves.
    let router = Router::new().route(
        "/",
        any(|| async {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({"error": "boom"})),
            )
        }),
    );
    let base_url = spawn_router(router).await;
    let client = GatewayClient::new(base_url).unwrap();

    let query = TransactionQuery::new(1u64, TransactionType::Buy, 1.0).unwrap();
    assert_eq!(
        client.fetch_transaction(&query).await.unwrap(),
        json!({"error": "boom"})
    );
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = {
        let hits = hits.clone();
        Router::new().route(
            "/",
            any(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    "not json"
                }
            }),
        )
    };
    let base_url = spawn_router(router).await;
    let client = GatewayClient::new(base_url).unwrap();

    let query = TransactionQuery::new(1u64, TransactionType::Buy, 1.0).unwrap();
    let err = client.fetch_transaction(&query).await.unwrap_err();
    assert!(matches!(err, TxGateError::Decode { .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let submission = TransactionSubmission::new(1u64, TransactionType::Sell, 1.0).unwrap();
    let err = client.submit_transaction(&submission).await.unwrap_err();
    assert!(matches!(err, TxGateError::Decode { .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    let err = client.query_options().await.unwrap_err();
    assert!(matches!(err, TxGateError::Decode { .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Bind and immediately drop a listener so the port is free but dead.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GatewayClient::new(format!("http://{}/", addr)).unwrap();

    let query = TransactionQuery::new(1u64, TransactionType::Buy, 1.0).unwrap();
    let err = client.fetch_transaction(&query).await.unwrap_err();
    assert!(matches!(err, TxGateError::Transport { .. }));

    let submission = TransactionSubmission::new(1u64, TransactionType::Sell, 1.0).unwrap();
    let err = client.submit_transaction(&submission).await.unwrap_err();
    assert!(matches!(err, TxGateError::Transport { .. }));

    let err = client.query_options().await.unwrap_err();
    assert!(matches!(err, TxGateError::Transport { .. }));
}

#[tokio::test]
async fn test_concurrent_calls_share_nothing() {
    let (base_url, state) = spawn_gateway().await;
    let client = GatewayClient::new(base_url).unwrap();

    let mut handles = Vec::new();
    for i in 0..8u64 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let query = TransactionQuery::new(i, TransactionType::Buy, i as f64).unwrap();
            client.fetch_transaction(&query).await.unwrap()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.await.unwrap();
        // Each call owns its own request/response pair.
        assert_eq!(value["transactionId"], json!(i.to_string()));
    }

    assert_eq!(state.stats.snapshot().requests_total, 8);
}
