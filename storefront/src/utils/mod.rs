//! # Utility Functions
//!
//! Shared utility functions used across the storefront client.
//!
//! ## Modules
//!
//! - **[`validation`]**: Form validation (account, checkout, product and inventory forms)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (price formatting, text truncation)
//! - [`crate::core`]: Core abstractions and error types

pub mod validation;
