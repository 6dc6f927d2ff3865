//! Classified API failures.
//!
//! ERROR HANDLING
//! ==============
//! Callers switch on three outcomes instead of probing response shapes:
//! `Unauthorized` (the credential is missing, invalid or expired),
//! `Validation` (the server refused the request and said why) and `Transient`
//! (anything worth retrying). Only the identity cache reacts to
//! `Unauthorized` by clearing the session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use super::transport::TransportError;

/// Error returned by every [`super::ApiClient`] request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: the presented credential was rejected.
    #[error("not signed in or session expired")]
    Unauthorized,
    /// Any other 4xx, carrying the server's explanation verbatim.
    #[error("{0}")]
    Validation(String),
    /// Network failure, 5xx, or an undecodable response.
    #[error("request failed, please try again ({0})")]
    Transient(String),
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::Transient(error.to_string())
    }
}

/// Classify a non-2xx response.
#[must_use]
pub fn classify_status(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        400..=499 => ApiError::Validation(
            extract_message(body).unwrap_or_else(|| format!("request rejected with status {status}")),
        ),
        _ => ApiError::Transient(format!("server returned status {status}")),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"detail": "..."}`, `{"detail": [{"msg": "..."}, ...]}` (field
/// validation lists, joined with `"; "`) and `{"message": "..."}`.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    match json.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => return Some(detail.clone()),
        Some(Value::Array(entries)) => {
            let joined = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return Some(joined);
            }
        }
        _ => {}
    }
    json.get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.trim().is_empty())
        .map(str::to_owned)
}
