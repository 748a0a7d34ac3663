//! # Sweet Bakery Storefront - Library Root
//!
//! Client for the bakery REST API: catalog browsing, cart and checkout, order
//! tracking, favourites and reviews, plus the back-office for products,
//! ingredients, recipes, reviews, customer questions and orders.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - Storefront root, auth/cart/toast         │
//! │  pages      - one controller per page                  │
//! │  services   - ApiClient over reqwest                   │
//! │  core       - AppError and service traits              │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP/JSON, Bearer token
//!          ▼
//! ┌─────────────────┐
//! │  Bakery API     │
//! │  (/api/...)     │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: the [`Storefront`] root and its shared contexts
//!   - `auth`: token, current user, session restore
//!   - `cart`: server-side cart mirror
//!   - `toast`: notification queue
//! - **pages**: page controllers, customer and back-office
//! - **services**: the HTTP client, one module per API area
//! - **core**: error types and the service traits pages depend on
//! - **config**: environment-driven client settings
//! - **debug**: `tracing` setup
//! - **utils**: form validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront::{config, Storefront};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let app = Storefront::from_config(config::load()?);
//! app.start().await;
//!
//! let mut shop = app.shop();
//! shop.load().await?;
//! for product in shop.visible() {
//!     println!("{} ${:.2}", product.name, product.price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! Contexts and pages depend on `Arc<dyn ...Api>` traits; unit tests swap in
//! in-memory fakes. Integration tests in `tests/` run the real client against
//! a fake backend served by axum.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod pages;
pub mod services;
pub mod utils;

pub use app::Storefront;
pub use core::{AppError, Result};
pub use services::api::{ApiClient, ApiError};
