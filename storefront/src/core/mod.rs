//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`AuthApi`, `CartApi`, ...)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::core::service::CartApi;
//! use storefront::services::api::ApiClient;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn CartApi> = Arc::new(ApiClient::with_base_url("http://localhost:8000"));
//! ```
//!
//! Tests implement the same traits over in-memory state.

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{
    ApiResult, AuthApi, CartApi, CatalogApi, FavouritesApi, InventoryApi, OrderApi, ReviewApi, Session, SupportApi,
};
