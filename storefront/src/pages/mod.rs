//! # Page Controllers
//!
//! One controller per storefront page. A controller loads its data through
//! the service traits, keeps the page's list and form state, and exposes the
//! page's actions. Successes are announced through the
//! [`ToastContext`](crate::app::toast::ToastContext); failures are returned
//! so the root can react to an expired session before toasting them.
//!
//! ## Customer pages
//!
//! - [`shop`]: catalog with category filter, sorting and pagination
//! - [`product`]: product detail, rating, reviews and favourite toggle
//! - [`cart`]: cart lines and totals
//! - [`checkout`]: shipping form, order creation and payment polling
//! - [`orders`]: order history and the order confirmation
//! - [`favourites`]: saved products
//! - [`questions`]: contact form and answered questions
//! - [`chatbot`]: support chat widget
//!
//! ## Back-office pages
//!
//! - [`admin_products`], [`admin_orders`], [`admin_reviews`]
//! - [`ingredients`]: inventory and stock ledger
//! - [`recipes`]: recipes and costing
//! - [`questions::AdminQuestionsPage`]: replies to customer questions

pub mod admin_orders;
pub mod admin_products;
pub mod admin_reviews;
pub mod cart;
pub mod chatbot;
pub mod checkout;
pub mod favourites;
pub mod ingredients;
pub mod orders;
pub mod product;
pub mod questions;
pub mod recipes;
pub mod shop;

use shared::CartAddResponse;

/// Result of an "add to cart" button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCart {
    Added(CartAddResponse),
    /// No user is logged in; the page should offer the login form.
    LoginRequired,
}
