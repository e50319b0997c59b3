//! Transaction lookup result model

use serde_json::Value;

use crate::api::blockstream::ApiError;

/// What the display shows after one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Response document, passed through unmodified
    Success(Value),
    /// Human-readable failure description
    Failure(String),
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }

    /// Text for the display region: the literal JSON, or `Error: <message>`
    pub fn render(&self, pretty: bool) -> String {
        match self {
            LookupOutcome::Success(document) if pretty => {
                serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
            }
            LookupOutcome::Success(document) => document.to_string(),
            LookupOutcome::Failure(message) => format!("Error: {}", message),
        }
    }
}

impl From<Result<Value, ApiError>> for LookupOutcome {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(document) => LookupOutcome::Success(document),
            Err(e) => LookupOutcome::Failure(e.to_string()),
        }
    }
}
