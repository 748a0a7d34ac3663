use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product summary embedded in a cart line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartProduct {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub is_available: bool,
}

/// Cart line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub cart_id: String,
    pub quantity: u32,
    #[serde(with = "crate::dto::timestamp")]
    pub added_at: DateTime<Utc>,
    pub product: CartProduct,
}

impl CartItem {
    /// Price times quantity for this line.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Server-computed cart totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CartTotal {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    pub total_items: u32,
}

/// Body for adding to or updating a cart line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartQuantity {
    pub quantity: u32,
}

/// Response of `POST /api/cart/{product_id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartAddResponse {
    pub message: String,
    pub cart_id: String,
    pub quantity: u32,
}
