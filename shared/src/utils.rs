//! # Shared Utility Functions
//!
//! Display helpers used by the storefront pages and the CLI.
//!
//! ```rust
//! use shared::utils::{format_price, truncate_text};
//!
//! assert_eq!(format_price(12.5), "$12.50");
//! assert_eq!(truncate_text("Chocolate fudge cake", 9), "Chocolate...");
//! ```

/// Format an amount in dollars with two decimals.
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(0.0), "$0.00");
/// assert_eq!(format_price(5.99), "$5.99");
/// ```
pub fn format_price(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so accented product names are never split
/// inside a code point.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
