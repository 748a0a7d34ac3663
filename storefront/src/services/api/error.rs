//! # API Errors
//!
//! Failures of a single HTTP exchange with the bakery API.

use shared::ErrorResponse;
use thiserror::Error;

/// Error returned by every endpoint function in [`crate::services::api`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, DNS).
    #[error("Network error: {0}")]
    Network(String),

    /// 401 to a request that carried a bearer token.
    #[error("Session expired")]
    SessionExpired,

    /// Non-2xx answer. `detail` is the message found in the error body, if any.
    #[error("{}", http_message(.status, .detail))]
    Http { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The backend detail when present, `fallback` for detail-less HTTP errors.
    ///
    /// Transport and parse errors keep their own description.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { detail: Some(detail), .. } => detail.clone(),
            ApiError::Http { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

fn http_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.clone(),
        None => format!("HTTP error! status: {}", status),
    }
}

/// Extract the human readable message from an error body.
///
/// Handles `{"detail": "..."}`, `{"message": "..."}` and request validation
/// failures shaped as `{"detail": [{"msg": "...", ...}]}`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    if let Ok(error) = serde_json::from_str::<ErrorResponse>(body) {
        return error.text().map(str::to_string);
    }

    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_array()?
        .first()?
        .get("msg")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_shapes() {
        assert_eq!(
            extract_detail(r#"{"detail":"Email already registered"}"#).as_deref(),
            Some("Email already registered")
        );
        assert_eq!(
            extract_detail(r#"{"message":"Not allowed"}"#).as_deref(),
            Some("Not allowed")
        );
        assert_eq!(
            extract_detail(
                r#"{"detail":[{"loc":["body","phone"],"msg":"String should have at least 10 characters","type":"string_too_short"}]}"#
            )
            .as_deref(),
            Some("String should have at least 10 characters")
        );
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn test_display_and_fallbacks() {
        let err = ApiError::Http { status: 500, detail: None };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.message_or("Login failed"), "Login failed");

        let err = ApiError::Http {
            status: 401,
            detail: Some("Incorrect email or password".to_string()),
        };
        assert_eq!(err.message_or("Login failed"), "Incorrect email or password");
        assert!(!err.is_not_found());

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.message_or("Login failed"), "Network error: connection refused");
    }
}
