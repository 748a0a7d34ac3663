//! # Logging Infrastructure
//!
//! Structured logging for the storefront client built on `tracing`.
//!
//! ## Features
//!
//! - **File-based logging**: structured logs to `logs/storefront.log.<date>` (daily rotation)
//! - **Optional console mirror**: compact events on stderr
//! - **API timing**: every request logs `duration_ms`, `status` and a `request_id`
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize once at startup and keep the guard alive
//! let _log_guard = storefront::debug::init();
//!
//! tracing::info!(endpoint = "/api/cart", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `storefront=debug,info`)
//! - `STOREFRONT_LOG_DIR`: Log directory (default `logs`)
//! - `STOREFRONT_LOG_STDERR`: Mirror events to stderr when `1`

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init, init_with};

/// File name prefix of the rolling log.
pub const LOG_FILE_NAME: &str = "storefront.log";
