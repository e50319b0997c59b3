use lazy_static::lazy_static;
use reqwest::{Client as HttpClient, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::models::ApiError;

lazy_static! {
    // One connection pool for the whole process; clones share it.
    static ref SHARED_HTTP_CLIENT: HttpClient = HttpClient::new();
}

/// Blockstream Esplora API client for transaction lookups
#[derive(Debug, Clone)]
pub struct BlockstreamClient {
    http_client: HttpClient,
    base_url: String,
}

impl BlockstreamClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://blockstream.info/api";

    /// Create a client against the public Blockstream API
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with custom base URL (testnet, self-hosted Esplora, test stubs)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: SHARED_HTTP_CLIENT.clone(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base_url}/tx/{txid}`.
    ///
    /// The txid is pushed as one path segment, so characters such as `/`, `?`
    /// or `#` are percent-encoded instead of reshaping the request. A hex txid
    /// comes out byte-identical to plain concatenation.
    pub fn transaction_url(&self, txid: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ApiError::NetworkFailure(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ApiError::NetworkFailure(format!("Base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("tx")
            .push(txid);

        Ok(url)
    }

    /// GET /tx/{txid}
    ///
    /// Fetches one transaction and returns the response document untouched.
    /// Exactly one request is made; nothing is retried or cached.
    ///
    /// # Returns
    /// * `Ok(Value)` - The JSON mapping or array sent by the server
    /// * `Err(ApiError)` - `NetworkFailure`, `UnexpectedStatus` or `MalformedResponse`
    pub async fn lookup_transaction(&self, txid: &str) -> Result<Value, ApiError> {
        let url = self.transaction_url(txid)?;
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkFailure(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("Lookup of {} returned {}", txid, status);
            return Err(ApiError::unexpected_status(status, &body_text));
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkFailure(format!("Failed to read response body: {}", e)))?;

        parse_document(&body_text)
    }
}

impl Default for BlockstreamClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a success body into a JSON mapping or array
fn parse_document(body_text: &str) -> Result<Value, ApiError> {
    if body_text.trim().is_empty() {
        return Err(ApiError::MalformedResponse("empty response body".to_string()));
    }

    let document: Value = serde_json::from_str(body_text)
        .map_err(|e| ApiError::MalformedResponse(format!("Failed to parse response: {}", e)))?;

    match document {
        Value::Object(_) | Value::Array(_) => Ok(document),
        other => Err(ApiError::MalformedResponse(format!(
            "expected a JSON object or array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
