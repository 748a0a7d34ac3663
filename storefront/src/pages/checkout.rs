//! # Checkout Page
//!
//! Turns the cart into an order. Cash on delivery finishes immediately; a
//! QR transfer yields a payment link and the page polls the API until the
//! payment is confirmed.

use crate::app::auth::AuthContext;
use crate::app::cart::CartContext;
use crate::app::guards;
use crate::app::toast::ToastContext;
use crate::core::error::{AppError, Result};
use crate::core::service::OrderApi;
use crate::services::api::ApiError;
use crate::utils::validation::{self, ValidationResult};
use shared::{CartItem, Order, OrderCreate, OrderItem, PaymentLink, PaymentMethod};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub shipping_address: String,
    pub phone: String,
    pub note: String,
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn validate(&self) -> ValidationResult {
        validation::first_failure([
            validation::validate_address(&self.shipping_address),
            validation::validate_phone(&self.phone),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The order exists; nothing left to pay online.
    Placed(Order),
    /// The order waits for the QR transfer described by `payment`.
    AwaitingPayment { order: Order, payment: PaymentLink },
}

impl CheckoutOutcome {
    pub fn order(&self) -> &Order {
        match self {
            CheckoutOutcome::Placed(order) => order,
            CheckoutOutcome::AwaitingPayment { order, .. } => order,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPoll {
    Paid,
    /// Still unpaid after every attempt.
    TimedOut,
}

/// Order lines for the current cart.
pub fn order_items(items: &[CartItem]) -> Vec<OrderItem> {
    items
        .iter()
        .map(|item| OrderItem {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            price: item.product.price,
            quantity: item.quantity,
            image: item.product.image.clone(),
        })
        .collect()
}

pub struct CheckoutPage {
    orders: Arc<dyn OrderApi>,
    auth: AuthContext,
    cart: CartContext,
    toasts: ToastContext,
    pub form: CheckoutForm,
}

impl CheckoutPage {
    /// The phone field starts with the user's profile phone.
    pub fn new(orders: Arc<dyn OrderApi>, auth: AuthContext, cart: CartContext, toasts: ToastContext) -> Self {
        let form = CheckoutForm {
            phone: auth.user().map(|u| u.phone).unwrap_or_default(),
            ..CheckoutForm::default()
        };
        Self {
            orders,
            auth,
            cart,
            toasts,
            form,
        }
    }

    /// Place the order and clear the cart.
    ///
    /// # Errors
    ///
    /// `Unauthorized` without a user, `Validation` for an empty cart or a bad
    /// form, otherwise the backend detail or "Failed to create order".
    pub async fn submit(&mut self) -> Result<CheckoutOutcome> {
        guards::require_auth(&self.auth)?;

        let items = self.cart.items();
        if items.is_empty() {
            return Err(AppError::Validation("Your cart is empty".to_string()));
        }
        self.form.validate().into_result()?;

        let note = self.form.note.trim();
        let request = OrderCreate {
            items: order_items(&items),
            shipping_address: self.form.shipping_address.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            note: (!note.is_empty()).then(|| note.to_string()),
            payment_method: self.form.payment_method,
        };

        let order = self
            .orders
            .create_order(request)
            .await
            .map_err(|e| AppError::from_api(e, "Failed to create order"))?;
        tracing::info!(
            order_id = %order.id,
            total = order.total_amount,
            payment_method = self.form.payment_method.as_str(),
            "Order placed"
        );

        if let Err(e) = self.cart.clear().await {
            tracing::warn!(order_id = %order.id, error = %e, "Order placed but the cart was not cleared");
        }

        if self.form.payment_method == PaymentMethod::Payos {
            match self.orders.create_payment_link(&order.id).await {
                Ok(payment) if payment.qr_code.is_some() => {
                    self.toasts.info("Scan the QR code to complete your payment");
                    return Ok(CheckoutOutcome::AwaitingPayment { order, payment });
                }
                Ok(_) => tracing::warn!(order_id = %order.id, "Payment link came without a QR code"),
                Err(e) => tracing::warn!(order_id = %order.id, error = %e, "Payment link unavailable"),
            }
        }

        self.toasts.success("Order placed successfully!");
        Ok(CheckoutOutcome::Placed(order))
    }

    /// Check the payment every `interval`, at most `max_attempts` times.
    ///
    /// Failed checks are retried; only an expired session stops the loop.
    pub async fn poll_payment(&self, order_id: &str, interval: Duration, max_attempts: u32) -> Result<PaymentPoll> {
        for attempt in 1..=max_attempts {
            tokio::time::sleep(interval).await;

            match self.orders.check_payment(order_id).await {
                Ok(check) if check.is_paid() => {
                    tracing::info!(order_id, attempt, "Payment confirmed");
                    self.toasts.success("Payment received!");
                    return Ok(PaymentPoll::Paid);
                }
                Ok(check) => {
                    tracing::debug!(order_id, attempt, status = %check.payment_status, "Payment pending");
                }
                Err(ApiError::SessionExpired) => return Err(AppError::SessionExpired),
                Err(e) => tracing::warn!(order_id, attempt, error = %e, "Payment check failed"),
            }
        }

        Ok(PaymentPoll::TimedOut)
    }
}
