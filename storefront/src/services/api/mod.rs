//! # Bakery API Client Module
//!
//! HTTP client for the bakery REST API. Every endpoint lives under `/api`,
//! takes and returns JSON, and authenticates with `Authorization: Bearer`.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient, request plumbing, service trait impls
//! ├── error.rs       - ApiError and error body parsing
//! ├── auth.rs        - login, register, profile
//! ├── products.rs    - catalog and admin product CRUD
//! ├── favourites.rs  - favourites
//! ├── cart.rs        - server-side cart
//! ├── orders.rs      - orders and the admin order desk
//! ├── payments.rs    - payment links and payment checks
//! ├── ingredients.rs - inventory and stock ledger
//! ├── recipes.rs     - recipes, costs, product stories
//! ├── reviews.rs     - reviews and moderation
//! ├── questions.rs   - customer Q&A
//! └── chatbot.rs     - support chatbot
//! ```
//!
//! ## Error Handling
//!
//! Every function returns `Result<T, ApiError>`:
//! - `Network`: the request produced no response
//! - `SessionExpired`: 401 to an authenticated request
//! - `Http { status, detail }`: any other non-2xx answer, `detail` taken from
//!   the `{"detail": ...}` body when present
//! - `Parse`: unexpected response shape

pub mod auth;
pub mod cart;
pub mod chatbot;
pub mod client;
pub mod error;
pub mod favourites;
pub mod ingredients;
pub mod orders;
pub mod payments;
pub mod products;
pub mod questions;
pub mod recipes;
pub mod reviews;

pub use client::ApiClient;
pub use error::ApiError;
