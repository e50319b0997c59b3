use thiserror::Error;

/// Longest slice of an error body kept for diagnostics
pub const MAX_DIAGNOSTIC_LEN: usize = 200;

/// Errors returned by a transaction lookup
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, interrupted body, bad URL
    #[error("Network failure: {0}")]
    NetworkFailure(String),
    /// Any status outside the 2xx range
    #[error("Unexpected code {status} {reason}{}", diagnostic_suffix(.body))]
    UnexpectedStatus {
        status: u16,
        reason: String,
        body: String,
    },
    /// 2xx response whose body is not a JSON mapping or array
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Build an `UnexpectedStatus` from the raw status and response text
    pub fn unexpected_status(status: reqwest::StatusCode, body_text: &str) -> Self {
        ApiError::UnexpectedStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body: truncate_diagnostic(body_text),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn diagnostic_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

/// Trim and bound a response body so it fits in a one-line message
pub fn truncate_diagnostic(body_text: &str) -> String {
    let trimmed = body_text.trim();
    if trimmed.chars().count() <= MAX_DIAGNOSTIC_LEN {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(MAX_DIAGNOSTIC_LEN).collect();
    cut.push_str("...");
    cut
}
