//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the bakery REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, profile
//! - [`product`] - Products, categories, counts
//! - [`cart`] - Cart items and totals
//! - [`favourite`] - Favourites
//! - [`order`] - Orders and payments
//! - [`ingredient`] - Ingredients and stock ledger entries
//! - [`recipe`] - Recipes and recipe costing
//! - [`review`] - Product reviews and ratings
//! - [`question`] - Customer Q&A
//! - [`chatbot`] - Chatbot widget
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "secret1"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer",
//!   "user": {
//!     "id": "65f0c0ffee",
//!     "email": "alice@example.com",
//!     "full_name": "Alice Baker",
//!     "phone": "0901234567",
//!     "role": "user",
//!     "is_active": true,
//!     "created_at": "2024-01-01T00:00:00"
//!   }
//! }
//! ```

pub mod auth;
pub mod cart;
pub mod chatbot;
pub mod favourite;
pub mod ingredient;
pub mod order;
pub mod product;
pub mod question;
pub mod recipe;
pub mod review;
pub mod timestamp;

pub use auth::*;
pub use cart::*;
pub use chatbot::*;
pub use favourite::*;
pub use ingredient::*;
pub use order::*;
pub use product::*;
pub use question::*;
pub use recipe::*;
pub use review::*;

use serde::{Deserialize, Serialize};

/// Error body returned by the API.
///
/// The backend answers errors with `{"detail": "..."}`; a few routes use
/// `{"message": "..."}` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Build an error body carrying a `detail` message.
    pub fn detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            message: None,
        }
    }

    /// The human readable message, preferring `detail` over `message`.
    pub fn text(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or(self.message.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Generic `{"message": "..."}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"count": n}` answer of the count endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    pub count: u64,
}
