//! # Services Module
//!
//! External service integrations. The storefront talks to exactly one
//! external system, the bakery REST API:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              storefront                  │
//! │  contexts (auth, cart, toast) + pages    │
//! │                   │                      │
//! │          Arc<dyn ...Api> traits          │
//! │                   │                      │
//! │            ApiClient (api/)              │
//! └───────────────────┼──────────────────────┘
//!                     │ HTTP/JSON + Bearer token
//!                     ▼
//! ┌──────────────────────────────────────────┐
//! │  Bakery API  /api/auth  /api/products    │
//! │  /api/cart  /api/orders  /api/payments   │
//! │  /api/ingredients  /api/recipes  ...     │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The payment gateway and the chatbot's language backend sit behind the
//! API and are never contacted directly.

pub mod api;
