//! # Common Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! ## Error Categories
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **SessionExpired**: The API rejected the stored bearer token
//! - **Unauthorized**: An operation needs a logged-in user
//! - **Forbidden**: An operation needs an administrator
//! - **State**: Context state errors (invalid transitions, missing data)
//! - **Validation**: Form validation errors
//!
//! ## Usage Pattern
//!
//! ```rust
//! use storefront::core::error::AppError;
//!
//! fn validate_quantity(quantity: f64) -> Result<f64, AppError> {
//!     if quantity <= 0.0 {
//!         return Err(AppError::Validation("Quantity must be greater than 0".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `String` / `&str` → `AppError::Api`
//! - [`ApiError`] → `AppError::SessionExpired` for rejected tokens,
//!   `AppError::Forbidden` for 403 answers, `AppError::Api` otherwise

use crate::services::api::ApiError;
use thiserror::Error;

/// Application-wide error type.
///
/// The `Display` output carries a category prefix for logs; pages show
/// [`AppError::message`] to users instead.
///
/// # Example
///
/// ```rust
/// use storefront::core::error::AppError;
///
/// let err = AppError::Validation("Phone number must be 10-15 digits".to_string());
/// assert_eq!(err.to_string(), "Validation error: Phone number must be 10-15 digits");
/// assert_eq!(err.message(), "Phone number must be 10-15 digits");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, non-2xx answers (carrying the backend `detail`)
    /// and malformed responses.
    #[error("API error: {0}")]
    Api(String),

    /// The API answered 401 to a request that carried a bearer token.
    ///
    /// The storefront root reacts by clearing the session.
    #[error("Session expired")]
    SessionExpired,

    /// A logged-in user is required.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An administrator is required.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Context state error.
    #[error("State error: {0}")]
    State(String),

    /// Form validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Message suitable for a toast, without the category prefix.
    pub fn message(&self) -> String {
        match self {
            AppError::Api(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::State(msg)
            | AppError::Validation(msg) => msg.clone(),
            AppError::SessionExpired => "Session expired".to_string(),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, AppError::SessionExpired)
    }

    /// Convert an API failure, using `fallback` when the backend sent no detail.
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        match &err {
            ApiError::SessionExpired => AppError::SessionExpired,
            ApiError::Http { status: 403, .. } => AppError::Forbidden(err.message_or(fallback)),
            _ => AppError::Api(err.message_or(fallback)),
        }
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Api(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Api(msg.to_string())
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match &err {
            ApiError::SessionExpired => AppError::SessionExpired,
            ApiError::Http { status: 403, .. } => AppError::Forbidden(err.to_string()),
            _ => AppError::Api(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_conversion() {
        assert_eq!(AppError::from(ApiError::SessionExpired), AppError::SessionExpired);
        assert_eq!(
            AppError::from(ApiError::Http {
                status: 403,
                detail: Some("Not enough permissions".to_string())
            }),
            AppError::Forbidden("Not enough permissions".to_string())
        );
        assert_eq!(
            AppError::from(ApiError::Http {
                status: 400,
                detail: Some("Insufficient stock".to_string())
            })
            .message(),
            "Insufficient stock"
        );
    }

    #[test]
    fn test_from_api_uses_fallback() {
        let bare = ApiError::Http { status: 500, detail: None };
        assert_eq!(
            AppError::from_api(bare, "Failed to load products"),
            AppError::Api("Failed to load products".to_string())
        );
        assert_eq!(
            AppError::from_api(ApiError::Http { status: 403, detail: None }, "Failed to delete"),
            AppError::Forbidden("Failed to delete".to_string())
        );
        assert!(AppError::from_api(ApiError::SessionExpired, "ignored").is_session_expired());
    }

    #[test]
    fn test_message_strips_prefix() {
        let err = AppError::Api("Cart item not found".to_string());
        assert_eq!(err.to_string(), "API error: Cart item not found");
        assert_eq!(err.message(), "Cart item not found");
        assert_eq!(AppError::SessionExpired.message(), "Session expired");
    }
}
