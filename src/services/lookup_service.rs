use std::time::Instant;

use tracing::{info, warn};

use crate::api::blockstream::BlockstreamClient;
use crate::models::LookupOutcome;
use crate::utils::looks_like_txid;

/// Look up one transaction and turn the result into a display outcome
pub async fn lookup(client: &BlockstreamClient, raw_input: &str) -> LookupOutcome {
    let txid = raw_input.trim();

    if !looks_like_txid(txid) {
        warn!("'{}' does not look like a 64-character hex txid, sending it anyway", txid);
    }

    info!("🔎 Looking up transaction {}", txid);
    let start_time = Instant::now();
    let result = client.lookup_transaction(txid).await;
    let elapsed_ms = start_time.elapsed().as_millis();

    match &result {
        Ok(_) => info!("✓ Transaction {} fetched in {}ms", txid, elapsed_ms),
        Err(e) => warn!(
            status = ?e.status(),
            "Lookup of {} failed after {}ms: {}",
            txid, elapsed_ms, e
        ),
    }

    LookupOutcome::from(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;

    const GENESIS_COINBASE: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";

    async fn spawn_echo_stub() -> String {
        let router = Router::new().route(
            "/api/tx/{txid}",
            get(|Path(txid): Path<String>| async move {
                Json(json!({ "txid": txid, "status": { "confirmed": true } }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{}/api", addr)
    }

    #[tokio::test]
    async fn test_lookup_trims_terminal_input() {
        let client = BlockstreamClient::with_base_url(spawn_echo_stub().await);

        let outcome = lookup(&client, &format!("  {}\n", GENESIS_COINBASE)).await;

        match outcome {
            LookupOutcome::Success(document) => assert_eq!(document["txid"], GENESIS_COINBASE),
            LookupOutcome::Failure(message) => panic!("unexpected failure: {}", message),
        }
    }

    #[tokio::test]
    async fn test_lookup_failure_carries_message() {
        // Nothing can listen on port 0, so the connect is always refused.
        let client = BlockstreamClient::with_base_url("http://127.0.0.1:0/api".to_string());

        let outcome = lookup(&client, GENESIS_COINBASE).await;

        assert!(!outcome.is_success());
        assert!(outcome.render(false).starts_with("Error: Network failure"));
    }
}
