//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the storefront client and the
//! bakery REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and user profile DTOs
//!   - **[`dto::product`]**: Catalog products and categories
//!   - **[`dto::cart`]**: Cart line items and totals
//!   - **[`dto::favourite`]**: Favourite products
//!   - **[`dto::order`]**: Orders, order status and payment DTOs
//!   - **[`dto::ingredient`]**: Ingredients and the stock ledger
//!   - **[`dto::recipe`]**: Recipes, costs and product stories
//!   - **[`dto::review`]**: Reviews and ratings
//!   - **[`dto::question`]**: Customer questions and admin replies
//!   - **[`dto::chatbot`]**: Support chatbot messages
//! - **[`utils`]**: Shared formatting helpers
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in both Rust and JSON
//! - Optional fields are omitted from request bodies when `None`
//! - Timestamps accept RFC 3339 (`2024-01-01T00:00:00Z`) as well as the naive
//!   ISO-8601 form the API emits (`2024-01-01T00:00:00.123456`), which is read as UTC
//! - Enums serialize to lowercase strings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, TokenResponse};
//!
//! # async fn demo() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: TokenResponse = reqwest::Client::new()
//!     .post("http://localhost:8000/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
