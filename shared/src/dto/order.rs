//! # Order and Payment DTOs
//!
//! Orders live under `/api/orders`, payment links and payment checks under
//! `/api/payments`. The payment gateway itself is only ever reached by the
//! API; clients see the resulting link, QR payload and status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn all() -> &'static [OrderStatus] {
        &[
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Confirmed,
            OrderStatus::Shipping,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Label shown to customers
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<OrderStatus> {
        OrderStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery
    #[default]
    Cod,
    /// QR bank transfer through the payment gateway
    Payos,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Payos => "payos",
        }
    }

    pub fn parse(raw: &str) -> Option<PaymentMethod> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cod" => Some(PaymentMethod::Cod),
            "payos" => Some(PaymentMethod::Payos),
            _ => None,
        }
    }
}

/// One product line of an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCreate {
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub payment_method: PaymentMethod,
}

/// A placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub shipping_address: String,
    pub phone: String,
    #[serde(default)]
    pub note: Option<String>,
    /// `cod`, `payos`; older orders may carry other values
    pub payment_method: String,
    /// `unpaid`, `paid` or `refunded`
    pub payment_status: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub vnpay_transaction_id: Option<String>,
    #[serde(default, with = "crate::dto::timestamp::option")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(with = "crate::dto::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "crate::dto::timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Body of `PUT /api/orders/{id}/status`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Order counters per status (`GET /api/orders/stats/count`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderStats {
    pub total: u64,
    pub pending: u64,
    pub paid: u64,
    pub confirmed: u64,
    pub shipping: u64,
    pub delivered: u64,
    pub cancelled: u64,
}

/// Payment link created for an order (`POST /api/payments/payos/{order_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentLink {
    pub order_id: String,
    pub order_code: i64,
    pub payment_url: String,
    #[serde(default)]
    pub qr_code: Option<String>,
    pub amount: f64,
}

/// Gateway-backed payment check (`GET /api/payments/payos/check/{order_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentCheck {
    pub order_id: String,
    #[serde(default)]
    pub order_code: Option<i64>,
    pub payment_status: String,
    #[serde(default)]
    pub payos_status: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PaymentCheck {
    /// Paid either locally or according to the gateway.
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid" || self.payos_status.as_deref() == Some("PAID")
    }
}

/// Locally recorded payment state (`GET /api/payments/check/{order_id}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentStatusInfo {
    pub order_id: String,
    pub payment_status: String,
    pub payment_method: String,
    #[serde(default, with = "crate::dto::timestamp::option")]
    pub paid_at: Option<DateTime<Utc>>,
}
